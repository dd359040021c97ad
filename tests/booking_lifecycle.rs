mod common;

use common::{seed_slot, seed_user, test_pool};
use tutoring_booking_service::db;
use tutoring_booking_service::dto::BookingQuery;
use tutoring_booking_service::errors::ApiError;
use tutoring_booking_service::models::{BookingStatus, Role};
use tutoring_booking_service::service::booking;

#[actix_rt::test]
async fn booking_claims_the_slot_and_synthesizes_a_link() {
    let pool = test_pool().await;
    let tutor = seed_user("tutor", Role::Tutor, &pool).await;
    let student = seed_user("student", Role::Student, &pool).await;
    let slot = seed_slot(&tutor, None, &pool).await;

    let created = booking::create(&student, slot.id, &pool).await.unwrap();
    assert_eq!(created.status, BookingStatus::Requested);
    // link withheld while the booking is only requested
    assert!(created.meeting_link.is_none());

    let slot_after = db::slot::get_by_id(slot.id, &pool).await.unwrap().unwrap();
    assert!(!slot_after.available);
    assert_eq!(
        slot_after.meeting_link.as_deref(),
        Some(booking::synthesize_meeting_link(&slot.id).as_str())
    );
}

#[actix_rt::test]
async fn tutor_supplied_link_is_kept() {
    let pool = test_pool().await;
    let tutor = seed_user("tutor", Role::Tutor, &pool).await;
    let student = seed_user("student", Role::Student, &pool).await;
    let slot = seed_slot(&tutor, Some("https://meet.example.com/room-1"), &pool).await;

    booking::create(&student, slot.id, &pool).await.unwrap();

    let slot_after = db::slot::get_by_id(slot.id, &pool).await.unwrap().unwrap();
    assert_eq!(
        slot_after.meeting_link.as_deref(),
        Some("https://meet.example.com/room-1")
    );
}

#[actix_rt::test]
async fn second_student_cannot_book_a_taken_slot() {
    let pool = test_pool().await;
    let tutor = seed_user("tutor", Role::Tutor, &pool).await;
    let first = seed_user("first", Role::Student, &pool).await;
    let second = seed_user("second", Role::Student, &pool).await;
    let slot = seed_slot(&tutor, None, &pool).await;

    booking::create(&first, slot.id, &pool).await.unwrap();
    let err = booking::create(&second, slot.id, &pool).await.unwrap_err();
    assert!(matches!(err, ApiError::SlotUnavailable));
}

#[actix_rt::test]
async fn rebooking_an_active_pair_is_rejected() {
    let pool = test_pool().await;
    let tutor = seed_user("tutor", Role::Tutor, &pool).await;
    let student = seed_user("student", Role::Student, &pool).await;
    let slot = seed_slot(&tutor, None, &pool).await;

    booking::create(&student, slot.id, &pool).await.unwrap();
    let err = booking::create(&student, slot.id, &pool).await.unwrap_err();
    assert!(matches!(err, ApiError::DuplicateBooking));
}

#[actix_rt::test]
async fn cancelling_releases_the_slot() {
    let pool = test_pool().await;
    let tutor = seed_user("tutor", Role::Tutor, &pool).await;
    let student = seed_user("student", Role::Student, &pool).await;
    let slot = seed_slot(&tutor, None, &pool).await;

    let created = booking::create(&student, slot.id, &pool).await.unwrap();
    let cancelled = booking::transition(&student, created.id, BookingStatus::Cancelled, &pool)
        .await
        .unwrap();
    assert_eq!(cancelled.status, BookingStatus::Cancelled);

    let slot_after = db::slot::get_by_id(slot.id, &pool).await.unwrap().unwrap();
    assert!(slot_after.available);
}

#[actix_rt::test]
async fn rebooking_after_cancellation_reuses_the_row() {
    let pool = test_pool().await;
    let tutor = seed_user("tutor", Role::Tutor, &pool).await;
    let student = seed_user("student", Role::Student, &pool).await;
    let slot = seed_slot(&tutor, None, &pool).await;

    let first = booking::create(&student, slot.id, &pool).await.unwrap();
    booking::transition(&student, first.id, BookingStatus::Cancelled, &pool)
        .await
        .unwrap();

    let second = booking::create(&student, slot.id, &pool).await.unwrap();
    assert_eq!(second.id, first.id);
    assert_eq!(second.status, BookingStatus::Requested);

    let slot_after = db::slot::get_by_id(slot.id, &pool).await.unwrap().unwrap();
    assert!(!slot_after.available);
}

#[actix_rt::test]
async fn cancelled_pair_cannot_reactivate_over_another_booking() {
    let pool = test_pool().await;
    let tutor = seed_user("tutor", Role::Tutor, &pool).await;
    let first = seed_user("first", Role::Student, &pool).await;
    let second = seed_user("second", Role::Student, &pool).await;
    let slot = seed_slot(&tutor, None, &pool).await;

    let b1 = booking::create(&first, slot.id, &pool).await.unwrap();
    booking::transition(&first, b1.id, BookingStatus::Cancelled, &pool)
        .await
        .unwrap();
    booking::create(&second, slot.id, &pool).await.unwrap();

    // the slot now belongs to the second student; the first may not reactivate
    let err = booking::create(&first, slot.id, &pool).await.unwrap_err();
    assert!(matches!(err, ApiError::SlotUnavailable));
}

#[actix_rt::test]
async fn lifecycle_reaches_completed_and_discloses_the_link() {
    let pool = test_pool().await;
    let tutor = seed_user("tutor", Role::Tutor, &pool).await;
    let student = seed_user("student", Role::Student, &pool).await;
    let slot = seed_slot(&tutor, None, &pool).await;

    let created = booking::create(&student, slot.id, &pool).await.unwrap();

    let confirmed = booking::transition(&tutor, created.id, BookingStatus::Confirmed, &pool)
        .await
        .unwrap();
    assert_eq!(confirmed.status, BookingStatus::Confirmed);
    assert!(confirmed.meeting_link.is_some());

    let completed = booking::transition(&tutor, created.id, BookingStatus::Completed, &pool)
        .await
        .unwrap();
    assert_eq!(completed.status, BookingStatus::Completed);
    assert!(completed.meeting_link.is_some());
}

#[actix_rt::test]
async fn illegal_transitions_are_rejected() {
    let pool = test_pool().await;
    let tutor = seed_user("tutor", Role::Tutor, &pool).await;
    let student = seed_user("student", Role::Student, &pool).await;
    let slot = seed_slot(&tutor, None, &pool).await;

    let created = booking::create(&student, slot.id, &pool).await.unwrap();

    // cannot complete a session that was never confirmed
    let err = booking::transition(&tutor, created.id, BookingStatus::Completed, &pool)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidTransition));

    booking::transition(&tutor, created.id, BookingStatus::Confirmed, &pool)
        .await
        .unwrap();
    booking::transition(&tutor, created.id, BookingStatus::Completed, &pool)
        .await
        .unwrap();

    // completed is terminal
    let err = booking::transition(&student, created.id, BookingStatus::Cancelled, &pool)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidTransition));
}

#[actix_rt::test]
async fn listing_is_scoped_to_the_callers_own_bookings() {
    let pool = test_pool().await;
    let tutor = seed_user("tutor", Role::Tutor, &pool).await;
    let student = seed_user("student", Role::Student, &pool).await;
    let outsider = seed_user("outsider", Role::Student, &pool).await;
    let slot = seed_slot(&tutor, None, &pool).await;

    let created = booking::create(&student, slot.id, &pool).await.unwrap();
    booking::transition(&tutor, created.id, BookingStatus::Confirmed, &pool)
        .await
        .unwrap();

    let everything = BookingQuery {
        student_id: None,
        tutor_id: None,
    };

    // a confirmed link must never reach a third party, even via an
    // unfiltered listing
    let seen = booking::filter(&outsider, &everything, &pool).await.unwrap();
    assert!(seen.is_empty());

    // both participants still see the booking, link included
    for viewer in [&student, &tutor] {
        let seen = booking::filter(viewer, &everything, &pool).await.unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].meeting_link.is_some());
    }
}

#[actix_rt::test]
async fn listing_filters_stay_inside_the_callers_scope() {
    let pool = test_pool().await;
    let tutor = seed_user("tutor", Role::Tutor, &pool).await;
    let student = seed_user("student", Role::Student, &pool).await;
    let outsider = seed_user("outsider", Role::Student, &pool).await;
    let slot = seed_slot(&tutor, None, &pool).await;

    booking::create(&student, slot.id, &pool).await.unwrap();

    // pointing the filter at somebody else's bookings yields nothing
    let by_student = BookingQuery {
        student_id: Some(student.user_id),
        tutor_id: None,
    };
    let seen = booking::filter(&outsider, &by_student, &pool).await.unwrap();
    assert!(seen.is_empty());

    // the tutor may narrow to one of their students
    let seen = booking::filter(&tutor, &by_student, &pool).await.unwrap();
    assert_eq!(seen.len(), 1);
}

#[actix_rt::test]
async fn no_edge_leads_back_to_requested() {
    let pool = test_pool().await;
    let tutor = seed_user("tutor", Role::Tutor, &pool).await;
    let student = seed_user("student", Role::Student, &pool).await;
    let slot = seed_slot(&tutor, None, &pool).await;

    let created = booking::create(&student, slot.id, &pool).await.unwrap();
    booking::transition(&tutor, created.id, BookingStatus::Confirmed, &pool)
        .await
        .unwrap();

    // a legitimate participant asking for an impossible move is told the
    // move is impossible, not that they lack the right
    let err = booking::transition(&student, created.id, BookingStatus::Requested, &pool)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidTransition));
}

#[actix_rt::test]
async fn only_the_tutor_may_confirm() {
    let pool = test_pool().await;
    let tutor = seed_user("tutor", Role::Tutor, &pool).await;
    let student = seed_user("student", Role::Student, &pool).await;
    let slot = seed_slot(&tutor, None, &pool).await;

    let created = booking::create(&student, slot.id, &pool).await.unwrap();
    let err = booking::transition(&student, created.id, BookingStatus::Confirmed, &pool)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotEligible));
}

#[actix_rt::test]
async fn tutors_cannot_book_slots() {
    let pool = test_pool().await;
    let tutor = seed_user("tutor", Role::Tutor, &pool).await;
    let other_tutor = seed_user("other", Role::Tutor, &pool).await;
    let slot = seed_slot(&tutor, None, &pool).await;

    let err = booking::create(&other_tutor, slot.id, &pool).await.unwrap_err();
    assert!(matches!(err, ApiError::NotEligible));
}
