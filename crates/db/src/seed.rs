//! Demo data for an empty database.
//!
//! Heroes and powers have no creation endpoint, so a fresh install is
//! useless until something inserts them. [`seed_if_empty`] fills the three
//! tables with a small fixed roster.

use crate::models::hero::CreateHero;
use crate::models::hero_power::CreateHeroPower;
use crate::models::power::CreatePower;
use crate::repositories::{HeroPowerRepo, HeroRepo, PowerRepo};
use crate::DbPool;

const POWERS: &[(&str, &str)] = &[
    ("super strength", "gives the wielder super-human strengths"),
    ("flight", "gives the wielder the ability to fly through the skies at supersonic speed"),
    ("super human senses", "allows the wielder to use her senses at a super-human level"),
    ("elasticity", "can stretch the human body to extreme lengths"),
];

const HEROES: &[(&str, &str)] = &[
    ("Kamala Khan", "Ms. Marvel"),
    ("Doreen Green", "Squirrel Girl"),
    ("Gwen Stacy", "Spider-Gwen"),
    ("Janet Van Dyne", "The Wasp"),
    ("Wanda Maximoff", "Scarlet Witch"),
    ("Carol Danvers", "Captain Marvel"),
    ("Jean Grey", "Dark Phoenix"),
    ("Ororo Munroe", "Storm"),
    ("Kitty Pryde", "Shadowcat"),
    ("Elektra Natchios", "Elektra"),
];

/// `(hero index, power index, strength)` into [`HEROES`] / [`POWERS`].
const LINKS: &[(usize, usize, &str)] = &[
    (0, 3, "Average"),
    (1, 0, "Strong"),
    (2, 2, "Weak"),
    (5, 1, "Strong"),
    (5, 0, "Average"),
    (7, 1, "Average"),
];

/// Seed the demo roster when the `heroes` table is empty.
///
/// Everything is inserted in one transaction. Returns `true` if rows were
/// written, `false` if the database already had heroes.
pub async fn seed_if_empty(pool: &DbPool) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    if HeroRepo::count(&mut *tx).await? > 0 {
        tx.rollback().await?;
        return Ok(false);
    }

    let mut power_ids = Vec::with_capacity(POWERS.len());
    for (name, description) in POWERS {
        let input = CreatePower {
            name: (*name).to_string(),
            description: (*description).to_string(),
        };
        power_ids.push(PowerRepo::create(&mut tx, &input).await?.id);
    }

    let mut hero_ids = Vec::with_capacity(HEROES.len());
    for (name, super_name) in HEROES {
        let input = CreateHero {
            name: (*name).to_string(),
            super_name: (*super_name).to_string(),
        };
        hero_ids.push(HeroRepo::create(&mut tx, &input).await?.id);
    }

    for &(hero, power, strength) in LINKS {
        let input = CreateHeroPower {
            strength: strength.to_string(),
            hero_id: hero_ids[hero],
            power_id: power_ids[power],
        };
        HeroPowerRepo::create(&mut tx, &input).await?;
    }

    tx.commit().await?;
    tracing::info!(
        heroes = HEROES.len(),
        powers = POWERS.len(),
        links = LINKS.len(),
        "Seeded demo data"
    );
    Ok(true)
}
