use bcrypt::hash;
use fake::Fake;
use fake::faker::name::en::*;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;
use uuid::Uuid;

/// Every seeded account carries this email domain so cleanup can find them.
pub const SEED_EMAIL_DOMAIN: &str = "seed.example.com";

/// Shared password for all seeded teacher accounts.
pub const SEED_PASSWORD: &str = "password123";

pub struct TeacherSeed {
    pub user_name: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

pub struct StudentSeed {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub teacher_id: Uuid,
}

pub struct SeedConfig {
    pub teachers: usize,
    pub students_per_teacher: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            teachers: 5,
            students_per_teacher: 25,
        }
    }
}

/// Seeds the database with fake teachers and their rosters.
///
/// Performance notes:
/// 1. Fake data generation is parallelized with Rayon
/// 2. Rows land via multi-value INSERT statements, 1000 rows per batch
/// 3. The bcrypt hash is computed once and reused (cost 4 for speed;
///    real registrations use DEFAULT_COST)
/// 4. One transaction per table keeps each phase atomic
pub async fn seed_database(
    db: &PgPool,
    config: SeedConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();

    println!("🌱 Starting database seeding...");
    println!("   - Teachers: {}", config.teachers);
    println!("   - Students per teacher: {}", config.students_per_teacher);

    // Timestamp disambiguator so repeated seed runs never collide on the
    // unique username/email indexes.
    let run = chrono::Utc::now().timestamp();

    println!("\n🔐 Hashing shared password...");
    let hash_start = Instant::now();

    let password_hash =
        hash(SEED_PASSWORD, 4).map_err(|e| format!("Failed to hash password: {}", e))?;

    println!("   ✓ Hashed password in {:?}", hash_start.elapsed());

    println!("\n🔧 Generating teacher data in parallel...");
    let gen_start = Instant::now();

    let teachers = generate_teachers_parallel(config.teachers, run, &password_hash);

    println!(
        "   ✓ Generated {} teachers in {:?}",
        teachers.len(),
        gen_start.elapsed()
    );

    println!("\n👩‍🏫 Inserting teachers in batches...");
    let teacher_start = Instant::now();

    let teacher_ids = insert_teachers_batch(db, &teachers).await?;

    println!(
        "   ✓ Inserted {} teachers in {:?}",
        teacher_ids.len(),
        teacher_start.elapsed()
    );

    println!("\n🎒 Generating student data in parallel...");
    let student_gen_start = Instant::now();

    let students = generate_students_parallel(&teacher_ids, config.students_per_teacher, run);

    println!(
        "   ✓ Generated {} students in {:?}",
        students.len(),
        student_gen_start.elapsed()
    );

    println!("\n💾 Inserting students in batches...");
    let student_start = Instant::now();

    insert_students_batch(db, &students).await?;

    println!(
        "   ✓ Inserted {} students in {:?}",
        students.len(),
        student_start.elapsed()
    );

    println!(
        "\n✅ Seeding complete! Created {} teachers and {} students in {:?}",
        teacher_ids.len(),
        students.len(),
        start_time.elapsed()
    );
    println!(
        "\n📝 Default password for all seeded teachers: {}",
        SEED_PASSWORD
    );

    Ok(())
}

fn generate_teachers_parallel(count: usize, run: i64, password_hash: &str) -> Vec<TeacherSeed> {
    (0..count)
        .into_par_iter()
        .map(|idx| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();

            let tag = format!("{}t{}", run, idx);
            let user_name = format!(
                "{}.{}.{}",
                first_name.to_lowercase(),
                last_name.to_lowercase(),
                tag
            );
            let email = format!(
                "{}.{}+{}@{}",
                first_name.to_lowercase(),
                last_name.to_lowercase(),
                tag,
                SEED_EMAIL_DOMAIN
            );

            TeacherSeed {
                user_name,
                email,
                password_hash: password_hash.to_string(),
                first_name,
                last_name,
            }
        })
        .collect()
}

fn generate_students_parallel(
    teacher_ids: &[Uuid],
    students_per_teacher: usize,
    run: i64,
) -> Vec<StudentSeed> {
    // Lay out the (teacher, index) pairs sequentially, then generate the
    // actual rows in parallel.
    let mut assignments = Vec::with_capacity(teacher_ids.len() * students_per_teacher);
    for &teacher_id in teacher_ids {
        for _ in 0..students_per_teacher {
            assignments.push((teacher_id, assignments.len()));
        }
    }

    assignments
        .into_par_iter()
        .map(|(teacher_id, idx)| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();

            let email = format!(
                "{}.{}+{}s{}@{}",
                first_name.to_lowercase(),
                last_name.to_lowercase(),
                run,
                idx,
                SEED_EMAIL_DOMAIN
            );

            StudentSeed {
                first_name,
                last_name,
                email,
                teacher_id,
            }
        })
        .collect()
}

/// Inserts teachers in chunked multi-value INSERT statements inside a single
/// transaction, returning the generated ids in insertion order.
async fn insert_teachers_batch(
    db: &PgPool,
    teachers: &[TeacherSeed],
) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
    let mut tx = db.begin().await?;

    // 5 params per teacher; stay well under Postgres' ~32,767 bind limit.
    const BATCH_SIZE: usize = 1000;
    let mut all_ids = Vec::with_capacity(teachers.len());

    for chunk in teachers.chunks(BATCH_SIZE) {
        let ids = insert_teachers_chunk(&mut tx, chunk).await?;
        all_ids.extend(ids);
    }

    tx.commit().await?;
    Ok(all_ids)
}

async fn insert_teachers_chunk(
    tx: &mut Transaction<'_, Postgres>,
    teachers: &[TeacherSeed],
) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
    if teachers.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = String::from(
        "INSERT INTO teachers (user_name, email, password_hash, first_name, last_name) VALUES ",
    );

    for (i, _) in teachers.iter().enumerate() {
        if i > 0 {
            query.push_str(", ");
        }
        let param_idx = i * 5;
        query.push_str(&format!(
            "(${}, ${}, ${}, ${}, ${})",
            param_idx + 1,
            param_idx + 2,
            param_idx + 3,
            param_idx + 4,
            param_idx + 5
        ));
    }

    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar(&query);
    for teacher in teachers {
        q = q
            .bind(&teacher.user_name)
            .bind(&teacher.email)
            .bind(&teacher.password_hash)
            .bind(&teacher.first_name)
            .bind(&teacher.last_name);
    }

    let ids: Vec<Uuid> = q.fetch_all(&mut **tx).await?;
    Ok(ids)
}

async fn insert_students_batch(
    db: &PgPool,
    students: &[StudentSeed],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut tx = db.begin().await?;

    // 4 params per student.
    const BATCH_SIZE: usize = 1000;

    for chunk in students.chunks(BATCH_SIZE) {
        insert_students_chunk(&mut tx, chunk).await?;
    }

    tx.commit().await?;
    Ok(())
}

async fn insert_students_chunk(
    tx: &mut Transaction<'_, Postgres>,
    students: &[StudentSeed],
) -> Result<(), Box<dyn std::error::Error>> {
    if students.is_empty() {
        return Ok(());
    }

    let mut query =
        String::from("INSERT INTO students (first_name, last_name, email, teacher_id) VALUES ");

    for (i, _) in students.iter().enumerate() {
        if i > 0 {
            query.push_str(", ");
        }
        let param_idx = i * 4;
        query.push_str(&format!(
            "(${}, ${}, ${}, ${})",
            param_idx + 1,
            param_idx + 2,
            param_idx + 3,
            param_idx + 4
        ));
    }

    let mut q = sqlx::query(&query);
    for student in students {
        q = q
            .bind(&student.first_name)
            .bind(&student.last_name)
            .bind(&student.email)
            .bind(student.teacher_id);
    }

    q.execute(&mut **tx).await?;
    Ok(())
}

/// Removes every account created by [`seed_database`], matched by the seed
/// email domain. Rosters of seeded teachers go with them via cascade.
pub async fn clear_seeded_data(db: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing seeded data...");

    let pattern = format!("%@{}", SEED_EMAIL_DOMAIN);

    let mut tx = db.begin().await?;

    let students_deleted = sqlx::query("DELETE FROM students WHERE email LIKE $1")
        .bind(&pattern)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let teachers_deleted = sqlx::query("DELETE FROM teachers WHERE email LIKE $1")
        .bind(&pattern)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    tx.commit().await?;

    println!(
        "   ✓ Deleted {} teachers and {} students in {:?}",
        teachers_deleted,
        students_deleted,
        start_time.elapsed()
    );
    println!("✅ Seeded data cleared successfully!");

    Ok(())
}
