use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Input, Password};
use dotenvy::dotenv;
use teacher_portal::cli::create_teacher_account;
use teacher_portal::cli::seeder::{SeedConfig, clear_seeded_data, seed_database};

#[derive(Parser)]
#[command(name = "portal-cli")]
#[command(about = "Teacher Portal CLI - Administrative tools for the portal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new teacher account
    CreateTeacher {
        /// Username for signing in
        #[arg(short = 'u', long)]
        user_name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// First name of the teacher
        #[arg(short = 'f', long)]
        first_name: Option<String>,

        /// Last name of the teacher
        #[arg(short = 'l', long)]
        last_name: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake teachers and students
    Seed {
        /// Number of teachers to create
        #[arg(short = 't', long, default_value = "5")]
        teachers: usize,

        /// Number of students per teacher
        #[arg(short = 's', long, default_value = "25")]
        students: usize,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Clear all seeded data
    ClearSeed,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let cli = Cli::parse();

    match cli.command {
        Commands::CreateTeacher {
            user_name,
            email,
            first_name,
            last_name,
            password,
        } => handle_create_teacher(&pool, user_name, email, first_name, last_name, password).await,
        Commands::Seed {
            teachers,
            students,
            yes,
        } => handle_seed(&pool, teachers, students, yes).await,
        Commands::ClearSeed => handle_clear_seed(&pool).await,
    }
}

async fn handle_create_teacher(
    pool: &sqlx::postgres::PgPool,
    user_name: Option<String>,
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    password: Option<String>,
) {
    // Use provided values or prompt interactively
    let user_name = user_name.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Username")
            .interact_text()
            .expect("Failed to read username")
    });

    let email = email.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Email address")
            .interact_text()
            .expect("Failed to read email")
    });

    let first_name = first_name.unwrap_or_else(|| {
        Input::new()
            .with_prompt("First name")
            .interact_text()
            .expect("Failed to read first name")
    });

    let last_name = last_name.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Last name")
            .interact_text()
            .expect("Failed to read last name")
    });

    let password = password.unwrap_or_else(|| {
        Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .expect("Failed to read password")
    });

    match create_teacher_account(pool, &user_name, &email, &first_name, &last_name, &password).await
    {
        Ok(_) => {
            println!("\n✅ Teacher account created successfully!");
            println!("   Username: {}", user_name);
            println!("   Email: {}", email);
            println!("   Name: {} {}", first_name, last_name);
        }
        Err(e) => {
            eprintln!("\n❌ Error creating teacher account: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_seed(pool: &sqlx::postgres::PgPool, teachers: usize, students: usize, yes: bool) {
    if !yes {
        let total = teachers * students;
        let proceed = Confirm::new()
            .with_prompt(format!(
                "Seed {} teachers with {} students each ({} students total)?",
                teachers, students, total
            ))
            .default(false)
            .interact()
            .expect("Failed to read confirmation");

        if !proceed {
            println!("Aborted.");
            return;
        }
    }

    let config = SeedConfig {
        teachers,
        students_per_teacher: students,
    };

    match seed_database(pool, config).await {
        Ok(_) => {}
        Err(e) => {
            eprintln!("\n❌ Error seeding database: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_clear_seed(pool: &sqlx::postgres::PgPool) {
    match clear_seeded_data(pool).await {
        Ok(_) => {}
        Err(e) => {
            eprintln!("\n❌ Error clearing seeded data: {}", e);
            std::process::exit(1);
        }
    }
}
