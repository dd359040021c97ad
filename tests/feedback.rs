mod common;

use common::{seed_slot, seed_user, test_pool};
use tutoring_booking_service::dto::NewRatingDto;
use tutoring_booking_service::errors::{is_unique_violation, ApiError};
use tutoring_booking_service::models::{BookingStatus, Role};
use tutoring_booking_service::service::auth::UserAuthData;
use tutoring_booking_service::service::{booking, certificate, rating};
use tutoring_booking_service::db::DbPool;

async fn completed_booking(
    tutor: &UserAuthData,
    student: &UserAuthData,
    pool: &DbPool,
) -> uuid::Uuid {
    let slot = seed_slot(tutor, None, pool).await;
    let created = booking::create(student, slot.id, pool).await.unwrap();
    booking::transition(tutor, created.id, BookingStatus::Confirmed, pool)
        .await
        .unwrap();
    booking::transition(tutor, created.id, BookingStatus::Completed, pool)
        .await
        .unwrap();
    created.id
}

fn rating_dto(score: i64) -> NewRatingDto {
    NewRatingDto {
        score,
        comment: Some("great session".to_string()),
    }
}

#[actix_rt::test]
async fn each_side_rates_once() {
    let pool = test_pool().await;
    let tutor = seed_user("tutor", Role::Tutor, &pool).await;
    let student = seed_user("student", Role::Student, &pool).await;
    let booking_id = completed_booking(&tutor, &student, &pool).await;

    let from_student = rating::submit(&student, booking_id, rating_dto(5), &pool)
        .await
        .unwrap();
    assert_eq!(from_student.rater_role, Role::Student);

    let err = rating::submit(&student, booking_id, rating_dto(4), &pool)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::DuplicateRating));

    // the tutor's side is independent
    let from_tutor = rating::submit(&tutor, booking_id, rating_dto(4), &pool)
        .await
        .unwrap();
    assert_eq!(from_tutor.rater_role, Role::Tutor);
}

#[actix_rt::test]
async fn each_side_only_sees_its_own_rating() {
    let pool = test_pool().await;
    let tutor = seed_user("tutor", Role::Tutor, &pool).await;
    let student = seed_user("student", Role::Student, &pool).await;
    let booking_id = completed_booking(&tutor, &student, &pool).await;

    rating::submit(&student, booking_id, rating_dto(5), &pool)
        .await
        .unwrap();

    let own = rating::get_own(&student, booking_id, &pool).await.unwrap();
    assert_eq!(own.unwrap().score, 5);

    // the tutor has not rated yet and must not see the student's rating
    let own = rating::get_own(&tutor, booking_id, &pool).await.unwrap();
    assert!(own.is_none());
}

#[actix_rt::test]
async fn score_must_be_between_one_and_five() {
    let pool = test_pool().await;
    let tutor = seed_user("tutor", Role::Tutor, &pool).await;
    let student = seed_user("student", Role::Student, &pool).await;
    let booking_id = completed_booking(&tutor, &student, &pool).await;

    for score in [0, 6, -1] {
        let err = rating::submit(&student, booking_id, rating_dto(score), &pool)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BadClientData));
    }
}

#[actix_rt::test]
async fn outsiders_cannot_rate() {
    let pool = test_pool().await;
    let tutor = seed_user("tutor", Role::Tutor, &pool).await;
    let student = seed_user("student", Role::Student, &pool).await;
    let outsider = seed_user("outsider", Role::Student, &pool).await;
    let booking_id = completed_booking(&tutor, &student, &pool).await;

    let err = rating::submit(&outsider, booking_id, rating_dto(3), &pool)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotEligible));
}

#[actix_rt::test]
async fn constraint_hit_by_a_racing_rating_reads_as_a_duplicate() {
    use chrono::Utc;
    use tutoring_booking_service::db;
    use tutoring_booking_service::models::Rating;
    use uuid::Uuid;

    let pool = test_pool().await;
    let tutor = seed_user("tutor", Role::Tutor, &pool).await;
    let student = seed_user("student", Role::Student, &pool).await;
    let booking_id = completed_booking(&tutor, &student, &pool).await;

    // a second insert that skipped the pre-check, as a racing request
    // would, must be recognizable as the uniqueness rule firing
    let row = |id| Rating {
        id,
        booking_id,
        rater_role: Role::Student,
        score: 5,
        comment: None,
        created_at: Utc::now(),
    };
    db::rating::create(&row(Uuid::new_v4()), &pool).await.unwrap();
    let err = db::rating::create(&row(Uuid::new_v4()), &pool)
        .await
        .unwrap_err();
    assert!(is_unique_violation(&err));
    assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
}

#[actix_rt::test]
async fn certificate_issuance_is_idempotent() {
    let pool = test_pool().await;
    let tutor = seed_user("tutor", Role::Tutor, &pool).await;
    let student = seed_user("student", Role::Student, &pool).await;
    let booking_id = completed_booking(&tutor, &student, &pool).await;

    let first = certificate::issue_or_get(&student, booking_id, &pool)
        .await
        .unwrap();
    let second = certificate::issue_or_get(&student, booking_id, &pool)
        .await
        .unwrap();
    assert_eq!(first.id, second.id);
    assert_eq!(first.validation_code, second.validation_code);
    assert_eq!(first.hours, 1.0);

    let looked_up = certificate::get_by_code(&first.validation_code, &pool)
        .await
        .unwrap();
    assert_eq!(looked_up.booking_id, booking_id);
}

#[actix_rt::test]
async fn certificate_requires_a_completed_booking() {
    let pool = test_pool().await;
    let tutor = seed_user("tutor", Role::Tutor, &pool).await;
    let student = seed_user("student", Role::Student, &pool).await;
    let slot = seed_slot(&tutor, None, &pool).await;
    let created = booking::create(&student, slot.id, &pool).await.unwrap();

    let err = certificate::issue_or_get(&student, created.id, &pool)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotEligible));
}

#[actix_rt::test]
async fn only_the_student_gets_the_certificate() {
    let pool = test_pool().await;
    let tutor = seed_user("tutor", Role::Tutor, &pool).await;
    let student = seed_user("student", Role::Student, &pool).await;
    let booking_id = completed_booking(&tutor, &student, &pool).await;

    let err = certificate::issue_or_get(&tutor, booking_id, &pool)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotEligible));
}
