use dance_academy_api::{
    db::{DbPool, create_pool},
    dto::{
        classes::ProposeClassRequest,
        payments::CompletePaymentRequest,
        selections::SelectClassRequest,
        users::CreateUserRequest,
    },
    services::{class_service, payment_service, selection_service, user_service},
};
use uuid::Uuid;

// Integration flow: instructor proposes a class -> admin approves (twice, to
// check idempotence) -> student selects -> student pays -> payment recorded
// and selection retired -> client retry of the same payment is a no-op.
#[tokio::test]
async fn propose_approve_select_enroll_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let pool = setup_pool(&database_url).await?;

    let student_email = "student@example.com";
    create_user(&pool, student_email, "student").await?;
    let instructor_id = create_user(&pool, "instructor@example.com", "instructor").await?;

    // Creating the same user again is acknowledged without a new record.
    let repeat = user_service::create_if_absent(
        &pool,
        CreateUserRequest {
            email: "instructor@example.com".to_string(),
            name: None,
            photo: None,
            role: None,
        },
    )
    .await?;
    assert_eq!(repeat.message, "user already exists");
    assert!(repeat.data.is_none());

    // Instructor proposes a class; it starts Pending regardless of input.
    let proposed = class_service::propose(
        &pool,
        ProposeClassRequest {
            name: "Ballet I".to_string(),
            image: None,
            instructor_name: Some("Lead Instructor".to_string()),
            instructor_email: "instructor@example.com".to_string(),
            price: 50.0,
            available_seats: 10,
        },
    )
    .await?;
    let class = proposed.data.unwrap();
    assert_eq!(class.status, "Pending");

    // Admin approval is idempotent: a second call lands in the same state.
    let first = class_service::approve(&pool, class.id).await?;
    assert_eq!(first.data.unwrap().modified_count, 1);
    class_service::approve(&pool, class.id).await?;
    let fetched = class_service::get(&pool, class.id).await?.data.unwrap();
    assert_eq!(fetched.status, "Approved");

    // The instructor listing sees the class too.
    let mine = class_service::list_by_instructor(&pool, "instructor@example.com").await?;
    assert!(mine.data.unwrap().items.iter().any(|c| c.id == class.id));

    // Student puts the class in the cart.
    let selected = selection_service::select(
        &pool,
        SelectClassRequest {
            email: student_email.to_string(),
            class_id: class.id,
            class_name: Some(class.name.clone()),
            image: None,
            price: class.price,
        },
    )
    .await?;
    let selection = selected.data.unwrap();

    let cart = selection_service::list_for_student(&pool, student_email).await?;
    assert!(cart.data.unwrap().items.iter().any(|s| s.id == selection.id));

    // The payment page fetches the selection by id.
    let for_payment = selection_service::get(&pool, selection.id).await?;
    assert_eq!(for_payment.data.unwrap().id, selection.id);

    // Enrollment completion: one payment in, one selection out.
    let payment_payload = CompletePaymentRequest {
        email: student_email.to_string(),
        class_id: selection.id,
        class_name: Some(class.name.clone()),
        amount: 50.0,
        transaction_id: "pi_test_abc123".to_string(),
    };
    let outcome = payment_service::complete_enrollment(&pool, clone_payment(&payment_payload))
        .await?
        .data
        .unwrap();
    assert_eq!(outcome.inserted_count, 1);
    assert_eq!(outcome.deleted_count, 1);
    assert!(!outcome.duplicate);

    let cart = selection_service::list_for_student(&pool, student_email).await?;
    assert!(cart.data.unwrap().items.is_empty());

    let history = payment_service::list_for_student(&pool, student_email).await?;
    let payments = history.data.unwrap().items;
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].amount, 50.0);

    // Client retry with the identical payload: the transaction reference is
    // already recorded, so nothing is inserted and the delete is a no-op.
    let retry = payment_service::complete_enrollment(&pool, payment_payload)
        .await?
        .data
        .unwrap();
    assert!(retry.duplicate);
    assert_eq!(retry.inserted_count, 0);
    assert_eq!(retry.deleted_count, 0);

    let history = payment_service::list_for_student(&pool, student_email).await?;
    assert_eq!(history.data.unwrap().items.len(), 1);

    // Removing a selection that does not exist reports zero, not an error.
    let removed = selection_service::remove(&pool, Uuid::new_v4()).await?;
    assert_eq!(removed.data.unwrap().deleted_count, 0);

    // Role gate: email mismatch denies before any lookup.
    assert!(
        !user_service::check_role(&pool, student_email, "instructor@example.com", "instructor")
            .await?
    );
    // Matching email with the right role passes.
    user_service::set_role(&pool, instructor_id, "instructor").await?;
    assert!(
        user_service::check_role(
            &pool,
            "instructor@example.com",
            "instructor@example.com",
            "instructor"
        )
        .await?
    );
    // Matching email, wrong role: denied.
    assert!(
        !user_service::check_role(
            &pool,
            "instructor@example.com",
            "instructor@example.com",
            "admin"
        )
        .await?
    );

    Ok(())
}

async fn setup_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let pool = create_pool(database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    // Clean tables between runs
    sqlx::query(
        "TRUNCATE TABLE payments, selected_classes, classes, users, audit_logs RESTART IDENTITY CASCADE",
    )
    .execute(&pool)
    .await?;

    Ok(pool)
}

async fn create_user(pool: &DbPool, email: &str, role: &str) -> anyhow::Result<Uuid> {
    let resp = user_service::create_if_absent(
        pool,
        CreateUserRequest {
            email: email.to_string(),
            name: None,
            photo: None,
            role: Some(role.to_string()),
        },
    )
    .await?;
    Ok(resp.data.expect("created user").id)
}

fn clone_payment(payload: &CompletePaymentRequest) -> CompletePaymentRequest {
    CompletePaymentRequest {
        email: payload.email.clone(),
        class_id: payload.class_id,
        class_name: payload.class_name.clone(),
        amount: payload.amount,
        transaction_id: payload.transaction_id.clone(),
    }
}
