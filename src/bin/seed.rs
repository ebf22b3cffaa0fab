use dance_academy_api::{config::AppConfig, db::create_pool};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    let admin_id = ensure_user(&pool, "admin@example.com", "Studio Admin", "admin").await?;
    let instructor_id =
        ensure_user(&pool, "instructor@example.com", "Lead Instructor", "instructor").await?;
    ensure_user(&pool, "student@example.com", "First Student", "student").await?;
    seed_class(&pool, "instructor@example.com").await?;

    println!("Seed completed. Admin ID: {admin_id}, Instructor ID: {instructor_id}");
    Ok(())
}

async fn ensure_user(
    pool: &sqlx::PgPool,
    email: &str,
    name: &str,
    role: &str,
) -> anyhow::Result<Uuid> {
    let row: (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO users (id, email, name, role)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (email) DO UPDATE SET role = EXCLUDED.role
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(email)
    .bind(name)
    .bind(role)
    .fetch_one(pool)
    .await?;

    Ok(row.0)
}

async fn seed_class(pool: &sqlx::PgPool, instructor_email: &str) -> anyhow::Result<()> {
    let exist: Option<(Uuid,)> =
        sqlx::query_as("SELECT id FROM classes WHERE name = $1 AND instructor_email = $2")
            .bind("Ballet I")
            .bind(instructor_email)
            .fetch_optional(pool)
            .await?;
    if exist.is_some() {
        return Ok(());
    }

    sqlx::query(
        r#"
        INSERT INTO classes (id, name, instructor_name, instructor_email, price, available_seats, status)
        VALUES ($1, 'Ballet I', 'Lead Instructor', $2, 50.0, 10, 'Approved')
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(instructor_email)
    .execute(pool)
    .await?;

    Ok(())
}
