//! Actor command handlers

use crate::clients::CatalogClient;
use crate::models::actor::NewActor;

pub async fn cmd_actor_list(client: &CatalogClient) -> anyhow::Result<()> {
    let actors = client.list_actors().await?;

    if actors.is_empty() {
        println!("No actors found.");
        return Ok(());
    }

    println!("Actors ({} total)", actors.len());
    println!("{:-<40}", "");
    for actor in &actors {
        println!("{:>5}  {}", actor.actor_id, actor.full_name());
    }

    Ok(())
}

pub async fn cmd_actor_show(client: &CatalogClient, id: i32) -> anyhow::Result<()> {
    let detail = client.get_actor(id).await?;

    println!("{} (ID: {})", detail.actor.full_name(), detail.actor.actor_id);
    println!("{:-<40}", "");

    if detail.films.is_empty() {
        println!("No films linked.");
    } else {
        for film in &detail.films {
            println!("  [{}] {}", film.film_id, film.title);
        }
    }

    Ok(())
}

pub async fn cmd_actor_add(
    client: &CatalogClient,
    first_name: String,
    last_name: String,
) -> anyhow::Result<()> {
    let actor = NewActor {
        first_name,
        last_name,
    };
    let id = client.create_actor(&actor).await?;
    println!(
        "✓ Added actor {} {} ({})",
        actor.first_name, actor.last_name, id
    );
    Ok(())
}

pub async fn cmd_actor_delete(client: &CatalogClient, id: i32) -> anyhow::Result<()> {
    client.delete_actor(id).await?;
    println!("✓ Deleted actor {}", id);
    Ok(())
}

pub async fn cmd_actor_link(
    client: &CatalogClient,
    actor_id: i32,
    film_id: i32,
) -> anyhow::Result<()> {
    let message = client.link(actor_id, film_id).await?;
    println!("✓ {}", message);
    Ok(())
}

pub async fn cmd_actor_unlink(
    client: &CatalogClient,
    actor_id: i32,
    film_id: i32,
) -> anyhow::Result<()> {
    let message = client.unlink(actor_id, film_id).await?;
    println!("✓ {}", message);
    Ok(())
}
