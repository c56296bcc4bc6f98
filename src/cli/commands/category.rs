use crate::clients::CatalogClient;

pub async fn cmd_category_list(client: &CatalogClient) -> anyhow::Result<()> {
    let categories = client.list_categories().await?;

    println!("Categories ({} total)", categories.len());
    println!("{:-<30}", "");
    for category in &categories {
        println!("{:>3}  {}", category.category_id, category.name);
    }

    Ok(())
}

pub async fn cmd_category_show(client: &CatalogClient, id: i32) -> anyhow::Result<()> {
    let category = client.get_category(id).await?;
    println!("{} (ID: {})", category.name, category.category_id);
    println!("Last updated: {}", category.last_update);
    Ok(())
}
