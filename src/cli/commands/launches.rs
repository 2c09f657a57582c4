//! Launch listing commands

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::api::{Launch, SpaceXClient};
use crate::cli::output::{OutputFormat, column, print_formatted};
use crate::config::Config;
use crate::filter::{self, FilterState, PAGE_SIZE, Page};
use crate::prefs::{self, FavoriteSet, FavoritesStore};

#[derive(Args, Debug)]
pub struct LaunchesArgs {
    /// Case-insensitive substring of the mission name
    #[arg(long)]
    pub search: Option<String>,

    /// Only launches from this UTC year
    #[arg(long)]
    pub year: Option<i32>,

    /// Only successful launches
    #[arg(long)]
    pub successful: bool,

    /// Only favorite launches
    #[arg(long)]
    pub favorites: bool,

    /// Page to show (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

impl LaunchesArgs {
    fn filter_state(&self) -> FilterState {
        FilterState {
            search: self.search.clone().unwrap_or_default(),
            year: self.year,
            only_successful: self.successful,
            only_favorites: self.favorites,
        }
    }
}

#[derive(Serialize)]
struct LaunchRow {
    id: String,
    name: String,
    date_utc: String,
    rocket: String,
    status: &'static str,
    favorite: bool,
}

#[derive(Serialize)]
struct LaunchPage {
    page: usize,
    total_pages: usize,
    total_launches: usize,
    launches: Vec<LaunchRow>,
}

fn build_page(launches: &[Launch], args: &LaunchesArgs, favorites: &FavoriteSet) -> LaunchPage {
    let filtered = filter::filter_launches(launches, &args.filter_state(), favorites);
    let page: Page<&Launch> = filter::paginate(filtered, args.page, PAGE_SIZE);

    LaunchPage {
        page: page.number,
        total_pages: page.total_pages,
        total_launches: page.total_items,
        launches: page
            .items
            .iter()
            .map(|launch| LaunchRow {
                id: launch.id.clone(),
                name: launch.name.clone(),
                date_utc: launch.date_utc.to_rfc3339(),
                rocket: launch.rocket_display().to_string(),
                status: launch.status().label(),
                favorite: favorites.contains(&launch.id),
            })
            .collect(),
    }
}

fn format_page(page: &LaunchPage) -> String {
    if page.launches.is_empty() {
        return "No launches available.".to_string();
    }

    let mut lines: Vec<String> = page
        .launches
        .iter()
        .map(|row| {
            format!(
                "{} {} {} {} {}",
                if row.favorite { "★" } else { " " },
                column(&row.name, 32),
                column(&row.date_utc[..10], 10),
                column(&row.rocket, 14),
                row.status
            )
        })
        .collect();

    lines.push(String::new());
    lines.push(format!(
        "Page {} of {} ({} launches)",
        page.page, page.total_pages, page.total_launches
    ));
    lines.join("\n")
}

async fn fetch() -> Result<Vec<Launch>> {
    let config = Config::load()?;
    let client = SpaceXClient::new(&config.api.base_url)?;
    Ok(client.fetch_launches().await?)
}

pub async fn run(args: LaunchesArgs, format: OutputFormat, _quiet: bool) -> Result<()> {
    let launches = fetch().await?;
    let favorites = FavoritesStore::load(prefs::open_storage());

    let page = build_page(&launches, &args, favorites.set());
    print_formatted(&page, format, format_page);
    Ok(())
}

pub async fn years(format: OutputFormat) -> Result<()> {
    let launches = fetch().await?;
    let years = filter::available_years(&launches);

    print_formatted(&years, format, |years| {
        years
            .iter()
            .map(|y| y.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::launch;

    fn args(page: usize) -> LaunchesArgs {
        LaunchesArgs {
            search: None,
            year: None,
            successful: false,
            favorites: false,
            page,
        }
    }

    #[test]
    fn test_build_page_marks_favorites() {
        let launches = vec![
            launch("1", "Mission Alpha", "2020-01-01T00:00:00Z", Some(true)),
            launch("2", "Mission Beta", "2021-01-01T00:00:00Z", Some(false)),
        ];
        let favorites = FavoriteSet::default().toggled("2");

        let page = build_page(&launches, &args(1), &favorites);
        assert_eq!(page.total_launches, 2);
        assert!(!page.launches[0].favorite);
        assert!(page.launches[1].favorite);
        assert_eq!(page.launches[1].status, "Failure");

        let text = format_page(&page);
        assert!(text.contains("Mission Beta"));
        assert!(text.ends_with("Page 1 of 1 (2 launches)"));
    }

    #[test]
    fn test_build_page_second_page() {
        let launches: Vec<Launch> = (1..=10)
            .map(|i| launch(&i.to_string(), &format!("Flight {}", i), "2021-06-01T00:00:00Z", None))
            .collect();

        let page = build_page(&launches, &args(2), &FavoriteSet::default());
        assert_eq!(page.page, 2);
        assert_eq!(page.launches.len(), 2);
        assert_eq!(page.launches[0].name, "Flight 9");
    }

    #[test]
    fn test_empty_page_text() {
        let page = build_page(&[], &args(1), &FavoriteSet::default());
        assert_eq!(format_page(&page), "No launches available.");
    }
}
