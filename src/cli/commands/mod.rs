mod actor;
mod category;
mod film;

pub use actor::{
    cmd_actor_add, cmd_actor_delete, cmd_actor_link, cmd_actor_list, cmd_actor_show,
    cmd_actor_unlink,
};
pub use category::{cmd_category_list, cmd_category_show};
pub use film::{cmd_film_add, cmd_film_cast, cmd_film_delete, cmd_film_list, cmd_film_show};
