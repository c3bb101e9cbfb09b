//! Minimal Motzkin example: walk a family and unrank one path.

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // All Motzkin paths of length 4 (half-length 2).
    let family = combiter::family_from_name("motzkin", 2)?;
    println!(
        "{} Motzkin paths of {} steps",
        family.len(),
        family.path_len()
    );

    for id in 0..family.len() {
        let path = family.unrank(id);
        println!("{id}: {}", combiter::path::render(&path, "(-)")?);
    }

    let last = family.unrank(family.len() - 1);
    assert_eq!(last.to_parens(), "()()");

    Ok(())
}
