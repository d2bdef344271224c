//! Seed-data generator for the advocates table.
//!
//! Inserts a batch of randomly generated advocates so the directory has
//! something to page through. Controlled by environment variables:
//! `DATABASE_URL` (required), `SEED_COUNT` (default 150, which fills exactly
//! six 25-row pages) and `SEED_RNG_SEED` (fixed seed for reproducible data).

use advocates_directory::db::establish_connection_pool;
use advocates_directory::domain::advocate::NewAdvocate;
use advocates_directory::repository::{AdvocateWriter, DieselRepository};
use log::info;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Alice", "Michael", "Emily", "Chris", "Jessica", "David", "Laura", "Daniel",
    "Sarah", "James", "Megan", "Joshua", "Amanda", "Robert", "Jennifer", "William", "Lisa",
    "Richard", "Michelle", "Joseph", "Kimberly", "Thomas", "Angela", "Charles", "Ashley",
    "Christopher", "Brenda", "Matthew", "Emma", "Anthony", "Olivia", "Mark", "Cynthia", "Donald",
    "Marie", "Steven", "Janet", "Andrew",
];

const LAST_NAMES: &[&str] = &[
    "Doe", "Smith", "Johnson", "Brown", "Davis", "Martinez", "Taylor", "Harris", "Clark", "Lewis",
    "Lee", "King", "Green", "Walker", "Hall", "Allen", "Young", "Hernandez", "Wright", "Lopez",
    "Hill", "Scott", "Adams", "Baker", "Gonzalez", "Nelson", "Carter", "Mitchell", "Perez",
    "Roberts", "Turner", "Phillips", "Campbell", "Parker", "Evans", "Edwards", "Collins",
    "Stewart", "Sanchez", "Morris",
];

const CITIES: &[&str] = &[
    "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia", "San Antonio",
    "San Diego", "Dallas", "San Jose", "Austin", "Jacksonville", "Fort Worth", "Columbus",
    "Charlotte", "Indianapolis", "Seattle", "Denver", "Washington", "Boston", "Nashville",
    "Detroit", "Portland", "Las Vegas", "Memphis", "Baltimore", "Milwaukee", "Atlanta", "Miami",
    "Minneapolis",
];

const DEGREES: &[&str] = &["MD", "PhD", "MSW"];

const SPECIALTIES: &[&str] = &[
    "Bipolar",
    "LGBTQ",
    "Medication/Prescribing",
    "Suicide History/Attempts",
    "General Mental Health (anxiety, depression, stress, grief, life transitions)",
    "Men's issues",
    "Relationship Issues (family, friends, couple, etc)",
    "Trauma & PTSD",
    "Personality disorders",
    "Personal growth",
    "Substance use/abuse",
    "Pediatrics",
    "Women's issues (post-partum, infertility, family planning)",
    "Chronic pain",
    "Weight loss & nutrition",
    "Eating disorders",
    "Diabetic Diet and nutrition",
    "Coaching (leadership, career, academic and wellness)",
    "Life coaching",
    "Obsessive-compulsive disorders",
    "Neuropsychological evaluations & testing (ADHD testing)",
    "Attention and Hyperactivity (ADHD)",
    "Sleep issues",
    "Schizophrenia and psychotic disorders",
    "Learning disorders",
    "Domestic abuse",
];

fn pick<'a>(rng: &mut StdRng, pool: &[&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

/// 2 to 5 distinct specialties per advocate.
fn random_specialties(rng: &mut StdRng) -> Vec<String> {
    let count = rng.random_range(2..=5);
    let mut picked: Vec<String> = Vec::with_capacity(count);
    while picked.len() < count {
        let candidate = pick(rng, SPECIALTIES);
        if !picked.iter().any(|s| s == candidate) {
            picked.push(candidate.to_string());
        }
    }
    picked
}

/// 10-digit number with a non-zero leading digit, matching the upstream
/// generation scheme.
fn random_phone_number(rng: &mut StdRng) -> i64 {
    let area_code = rng.random_range(100..1000i64);
    let exchange = rng.random_range(100..1000i64);
    let line = rng.random_range(0..10000i64);
    area_code * 10_000_000 + exchange * 10_000 + line
}

fn generate_advocates(rng: &mut StdRng, count: usize) -> Vec<NewAdvocate> {
    let mut used_names = std::collections::HashSet::new();
    let mut advocates = Vec::with_capacity(count);

    for _ in 0..count {
        let (mut first_name, mut last_name) = (pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES));
        while !used_names.insert(format!("{first_name} {last_name}"))
            && used_names.len() < FIRST_NAMES.len() * LAST_NAMES.len()
        {
            first_name = pick(rng, FIRST_NAMES);
            last_name = pick(rng, LAST_NAMES);
        }

        advocates.push(NewAdvocate::new(
            first_name.to_string(),
            last_name.to_string(),
            pick(rng, CITIES).to_string(),
            pick(rng, DEGREES).to_string(),
            random_specialties(rng),
            rng.random_range(1..=20),
            random_phone_number(rng),
        ));
    }

    advocates
}


fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let database_url = std::env::var("DATABASE_URL")?;
    let count: usize = std::env::var("SEED_COUNT")
        .ok()
        .map(|v| v.parse())
        .transpose()?
        .unwrap_or(150);

    let mut rng = match std::env::var("SEED_RNG_SEED") {
        Ok(seed) => StdRng::seed_from_u64(seed.parse()?),
        Err(_) => StdRng::from_rng(&mut rand::rng()),
    };

    let pool = establish_connection_pool(&database_url)?;
    let repo = DieselRepository::new(pool);

    let advocates = generate_advocates(&mut rng, count);
    let inserted = repo.create(&advocates)?;
    info!("Seeded {inserted} advocates");

    Ok(())
}
