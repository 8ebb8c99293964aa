//! `vcm list [CATEGORY]` — list releases or distinct tag values

use crate::commands::print_releases;
use crate::services::QueryEngine;
use vcm_common::db::tags::TagKind;
use vcm_common::Config;

/// What `list` should enumerate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Releases,
    Genres,
    Styles,
}

impl Category {
    /// Parse the optional CLI argument; unknown values are rejected
    pub fn parse(arg: Option<&str>) -> Option<Category> {
        match arg {
            None => Some(Category::Releases),
            Some("genre") => Some(Category::Genres),
            Some("style") => Some(Category::Styles),
            Some(_) => None,
        }
    }
}

/// List releases (no category) or distinct tag values
///
/// An unrecognized category prints a message and exits normally
/// before the store is opened.
pub async fn run(config: &Config, category: Option<String>) -> anyhow::Result<()> {
    let Some(category) = Category::parse(category.as_deref()) else {
        println!("Invalid category argument");
        return Ok(());
    };

    let pool = vcm_common::db::init_database_pool(&config.database_path).await?;
    let engine = QueryEngine::new(pool);

    match category {
        Category::Releases => {
            let releases = engine.find_releases(None, None).await?;
            print_releases(&releases);
        }
        Category::Genres => {
            for value in engine.distinct_values(TagKind::Genre).await? {
                println!("  {value}");
            }
        }
        Category::Styles => {
            for value in engine.distinct_values(TagKind::Style).await? {
                println!("  {value}");
            }
        }
    }

    Ok(())
}
