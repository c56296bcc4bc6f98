//! Film command handlers

use crate::clients::CatalogClient;
use crate::models::film::{Film, NewFilm};

fn print_film_line(film: &Film) {
    let year = film
        .release_year
        .map_or_else(|| "----".to_string(), |y| y.to_string());
    println!(
        "{:>5}  {:<30} {}  {:<5}  ${:.2}",
        film.film_id,
        film.title,
        year,
        film.rating.as_str(),
        film.rental_rate
    );
}

pub async fn cmd_film_list(client: &CatalogClient, title: Option<&str>) -> anyhow::Result<()> {
    let films = client.list_films(title).await?;

    if films.is_empty() {
        println!("No films found.");
        return Ok(());
    }

    println!("Films ({} total)", films.len());
    println!("{:-<60}", "");
    for film in &films {
        print_film_line(film);
    }

    Ok(())
}

pub async fn cmd_film_show(client: &CatalogClient, id: i32) -> anyhow::Result<()> {
    let detail = client.get_film(id).await?;
    let film = &detail.film;

    println!("{}", film.title);
    println!("{:-<60}", "");
    if let Some(description) = &film.description {
        println!("{}", description);
        println!();
    }
    println!("ID:               {}", film.film_id);
    if let Some(year) = film.release_year {
        println!("Released:         {}", year);
    }
    if let Some(length) = film.length {
        println!("Length:           {} min", length);
    }
    println!("Rating:           {}", film.rating);
    println!(
        "Rental:           ${:.2} for {} days",
        film.rental_rate, film.rental_duration
    );
    println!("Replacement cost: ${:.2}", film.replacement_cost);

    println!();
    if detail.actors.is_empty() {
        println!("No actors linked.");
    } else {
        println!("Cast:");
        for actor in &detail.actors {
            println!("  [{}] {}", actor.actor_id, actor.full_name());
        }
    }

    Ok(())
}

pub async fn cmd_film_add(client: &CatalogClient, film: NewFilm) -> anyhow::Result<()> {
    let title = film.title.clone();
    let id = client.create_film(&film).await?;
    println!("✓ Added film {} ({})", title, id);
    Ok(())
}

pub async fn cmd_film_delete(client: &CatalogClient, id: i32) -> anyhow::Result<()> {
    client.delete_film(id).await?;
    println!("✓ Deleted film {}", id);
    Ok(())
}

pub async fn cmd_film_cast(
    client: &CatalogClient,
    id: i32,
    actor_ids: &[i32],
) -> anyhow::Result<()> {
    let count = client.replace_actors(id, actor_ids).await?;
    println!("✓ Film {} now has {} actors", id, count);
    Ok(())
}
