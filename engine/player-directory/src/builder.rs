//! Directory construction from the per-game averages page

use table_fetcher::{extract_table, extract_table_links, Table, TableFetcher};
use tracing::{info, warn};

use crate::config::DirectoryConfig;
use crate::error::DirectoryError;
use crate::types::{PlayerDirectory, PlayerRecord};

/// Columns the per-game stats table must carry for directory building
const REQUIRED_COLUMNS: &[&str] = &["Rk", "Player", "Pos", "MP"];

/// Plausible season end-years for the source site
const SEASON_RANGE: std::ops::RangeInclusive<u32> = 1947..=2100;

/// Builds a season's [`PlayerDirectory`] from one fetch of the per-game
/// averages page.
#[derive(Debug)]
pub struct DirectoryBuilder {
    fetcher: TableFetcher,
    config: DirectoryConfig,
}

impl DirectoryBuilder {
    pub fn new(fetcher: TableFetcher, config: DirectoryConfig) -> Result<Self, DirectoryError> {
        if !SEASON_RANGE.contains(&config.season) {
            return Err(DirectoryError::Config(format!(
                "season {} outside plausible range {}..={}",
                config.season,
                SEASON_RANGE.start(),
                SEASON_RANGE.end()
            )));
        }
        if !config.min_minutes.is_finite() || config.min_minutes < 0.0 {
            return Err(DirectoryError::Config(format!(
                "min_minutes {} must be a non-negative number",
                config.min_minutes
            )));
        }
        Ok(Self { fetcher, config })
    }

    /// Fetch the per-game page once and build the directory from it
    pub async fn build(&self) -> Result<PlayerDirectory, DirectoryError> {
        let url = self.config.per_game_url();
        info!(season = self.config.season, url, "building player directory");

        let html = self.fetcher.fetch_html(&url).await?;
        let table = extract_table(&html, self.config.table_index).map_err(table_fetcher::FetchError::from)?;
        let links = extract_table_links(&html, self.config.table_index)
            .map_err(table_fetcher::FetchError::from)?;

        let directory = parse_directory(&table, &links, &self.config)?;
        info!(
            season = self.config.season,
            players = directory.len(),
            "player directory built"
        );
        Ok(directory)
    }
}

/// Stable player id from a profile href.
///
/// Hrefs look like `/players/c/curryst01.html`; the id is the path segment
/// between the third and fourth separators with the `.html` suffix removed.
pub fn player_id_from_href(href: &str) -> Result<String, DirectoryError> {
    let segment = href
        .split('/')
        .nth(3)
        .ok_or_else(|| DirectoryError::MalformedLink { href: href.to_string() })?;
    let id = segment.strip_suffix(".html").unwrap_or(segment);
    if id.is_empty() {
        return Err(DirectoryError::MalformedLink { href: href.to_string() });
    }
    Ok(id.to_string())
}

/// Build the directory from an already-extracted table and its links.
///
/// Pure except for the timestamp; split out from [`DirectoryBuilder::build`]
/// so fixture pages can drive it in tests.
pub fn parse_directory(
    table: &Table,
    links: &[String],
    config: &DirectoryConfig,
) -> Result<PlayerDirectory, DirectoryError> {
    table
        .require_columns(REQUIRED_COLUMNS)
        .map_err(table_fetcher::FetchError::from)?;

    // Rows for traded players repeat and the site re-embeds the header row
    // mid-table; header echoes carry "Rk" in the rank cell and no link.
    let rk_col = table.column_index("Rk").unwrap_or(0);
    let data_rows: Vec<&Vec<String>> = table
        .rows
        .iter()
        .filter(|row| row.get(rk_col).map(String::as_str) != Some("Rk"))
        .collect();

    let profile_links: Vec<&String> =
        links.iter().filter(|href| href.starts_with("/players/")).collect();

    let name_col = table.column_index("Player").unwrap_or(0);
    let pos_col = table.column_index("Pos").unwrap_or(0);
    let mp_col = table.column_index("MP").unwrap_or(0);

    // Known same-name collision artifact: the row with an empty
    // disambiguator cell is bogus source data.
    let is_collision_artifact = |row: &[String]| {
        let name = row.get(name_col).map(String::as_str).unwrap_or("");
        config.name_collisions.iter().any(|c| {
            c.name == name
                && table
                    .column_index(&c.disambiguator_column)
                    .and_then(|col| row.get(col))
                    .map_or(true, |cell| cell.is_empty())
        })
    };

    let mut kept_rows: Vec<&Vec<String>> = Vec::with_capacity(data_rows.len());
    for row in data_rows.iter().copied() {
        if is_collision_artifact(row.as_slice()) {
            let name = row.get(name_col).map(String::as_str).unwrap_or("");
            warn!(player = %name, "dropping name-collision artifact row");
        } else {
            kept_rows.push(row);
        }
    }

    // Links must line up one-to-one with rows once collisions are resolved.
    // An artifact row may or may not carry a profile link of its own, so
    // pair before or after dropping, whichever the counts say.
    let pairs: Vec<(&Vec<String>, &String)> = if profile_links.len() == data_rows.len() {
        data_rows
            .iter()
            .copied()
            .zip(profile_links)
            .filter(|(row, _)| !is_collision_artifact(row.as_slice()))
            .collect()
    } else if profile_links.len() == kept_rows.len() {
        kept_rows.iter().copied().zip(profile_links).collect()
    } else {
        return Err(DirectoryError::LinkRowMismatch {
            links: profile_links.len(),
            rows: kept_rows.len(),
        });
    };

    let mut directory = PlayerDirectory::new(config.season);
    for (row, href) in pairs {
        let name = row.get(name_col).cloned().unwrap_or_default();
        let player_id = player_id_from_href(href)?;
        let minutes_played = match row.get(mp_col).and_then(|cell| cell.parse::<f64>().ok()) {
            Some(mp) => mp,
            None => {
                warn!(player_id, "unparsable minutes-played cell, skipping row");
                continue;
            }
        };
        let position = row.get(pos_col).cloned().unwrap_or_default();

        // First row wins: for traded players the combined-season row comes
        // first on the page.
        directory
            .players
            .entry(player_id.clone())
            .or_insert(PlayerRecord { player_id, name, position, minutes_played });
    }

    directory.players.retain(|_, rec| rec.minutes_played > config.min_minutes);

    if directory.is_empty() {
        return Err(DirectoryError::Empty { season: config.season });
    }
    Ok(directory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NameCollision;

    fn headers() -> Vec<String> {
        ["Rk", "Player", "Pos", "Age", "MP"].iter().map(|s| s.to_string()).collect()
    }

    fn row(rk: &str, player: &str, pos: &str, age: &str, mp: &str) -> Vec<String> {
        vec![rk.into(), player.into(), pos.into(), age.into(), mp.into()]
    }

    fn config() -> DirectoryConfig {
        DirectoryConfig::for_season(2024)
    }

    #[test]
    fn test_player_id_from_href() {
        assert_eq!(player_id_from_href("/players/c/curryst01.html").unwrap(), "curryst01");
        assert_eq!(player_id_from_href("/players/j/jamesle01.html").unwrap(), "jamesle01");
        assert!(player_id_from_href("/leagues/NBA_2024.html").is_err());
        assert!(player_id_from_href("/players").is_err());
    }

    #[test]
    fn test_basic_directory() {
        let table = Table::new(
            headers(),
            vec![
                row("1", "Alice Guard", "PG", "27", "34.2"),
                row("2", "Bob Center", "C", "31", "29.1"),
            ],
        );
        let links =
            vec!["/players/g/guardal01.html".to_string(), "/players/c/centebo01.html".to_string()];

        let dir = parse_directory(&table, &links, &config()).unwrap();
        assert_eq!(dir.len(), 2);
        assert_eq!(dir.get("guardal01").unwrap().name, "Alice Guard");
        assert_eq!(dir.get("centebo01").unwrap().minutes_played, 29.1);
        // BTreeMap keys come back sorted
        assert_eq!(dir.player_ids(), vec!["centebo01".to_string(), "guardal01".to_string()]);
    }

    #[test]
    fn test_repeated_header_rows_dropped() {
        let table = Table::new(
            headers(),
            vec![
                row("1", "Alice Guard", "PG", "27", "34.2"),
                row("Rk", "Player", "Pos", "Age", "MP"),
                row("2", "Bob Center", "C", "31", "29.1"),
            ],
        );
        let links =
            vec!["/players/g/guardal01.html".to_string(), "/players/c/centebo01.html".to_string()];

        let dir = parse_directory(&table, &links, &config()).unwrap();
        assert_eq!(dir.len(), 2);
    }

    #[test]
    fn test_dedup_keeps_first_record() {
        // Traded player: combined row first, then per-team rows.
        let table = Table::new(
            headers(),
            vec![
                row("1", "Alice Guard", "PG", "27", "34.2"),
                row("1", "Alice Guard", "PG", "27", "30.0"),
            ],
        );
        let links =
            vec!["/players/g/guardal01.html".to_string(), "/players/g/guardal01.html".to_string()];

        let dir = parse_directory(&table, &links, &config()).unwrap();
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.get("guardal01").unwrap().minutes_played, 34.2);
    }

    #[test]
    fn test_minutes_filter() {
        let table = Table::new(
            headers(),
            vec![
                row("1", "Alice Guard", "PG", "27", "34.2"),
                row("2", "Deep Bench", "SF", "22", "4.5"),
            ],
        );
        let links =
            vec!["/players/g/guardal01.html".to_string(), "/players/b/benchde01.html".to_string()];

        let dir = parse_directory(&table, &links, &config()).unwrap();
        assert_eq!(dir.len(), 1);
        assert!(dir.get("benchde01").is_none());
    }

    #[test]
    fn test_link_row_mismatch_is_fatal() {
        let table = Table::new(headers(), vec![row("1", "Alice Guard", "PG", "27", "34.2")]);
        let err = parse_directory(&table, &[], &config()).unwrap_err();
        assert!(matches!(err, DirectoryError::LinkRowMismatch { links: 0, rows: 1 }));
    }

    #[test]
    fn test_name_collision_artifact_dropped() {
        let table = Table::new(
            headers(),
            vec![
                row("1", "Marcus Shared", "SG", "24", "31.0"),
                row("2", "Marcus Shared", "SG", "", "12.0"),
            ],
        );
        let links = vec![
            "/players/s/sharema01.html".to_string(),
            "/players/s/sharema02.html".to_string(),
        ];
        let mut cfg = config();
        cfg.name_collisions.push(NameCollision {
            name: "Marcus Shared".to_string(),
            disambiguator_column: "Age".to_string(),
        });

        let dir = parse_directory(&table, &links, &cfg).unwrap();
        assert_eq!(dir.len(), 1);
        assert!(dir.get("sharema01").is_some());
        assert!(dir.get("sharema02").is_none());
    }

    #[test]
    fn test_name_collision_artifact_without_link_still_aligns() {
        // The artifact row carries no profile link of its own, so the
        // link list only covers the rows that survive collision filtering.
        let table = Table::new(
            headers(),
            vec![
                row("1", "Marcus Shared", "SG", "24", "31.0"),
                row("2", "Marcus Shared", "SG", "", "12.0"),
            ],
        );
        let links = vec!["/players/s/sharema01.html".to_string()];
        let mut cfg = config();
        cfg.name_collisions.push(NameCollision {
            name: "Marcus Shared".to_string(),
            disambiguator_column: "Age".to_string(),
        });

        let dir = parse_directory(&table, &links, &cfg).unwrap();
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.get("sharema01").unwrap().minutes_played, 31.0);
    }

    #[test]
    fn test_mismatch_after_collision_resolution_is_fatal() {
        let table = Table::new(
            headers(),
            vec![
                row("1", "Alice Guard", "PG", "27", "34.2"),
                row("2", "Bob Center", "C", "31", "29.1"),
            ],
        );
        // One link for two real rows, and no collision to explain it.
        let links = vec!["/players/g/guardal01.html".to_string()];
        let err = parse_directory(&table, &links, &config()).unwrap_err();
        assert!(matches!(err, DirectoryError::LinkRowMismatch { links: 1, rows: 2 }));
    }

    #[test]
    fn test_non_player_links_ignored() {
        let table = Table::new(headers(), vec![row("1", "Alice Guard", "PG", "27", "34.2")]);
        let links =
            vec!["/teams/AAA/2024.html".to_string(), "/players/g/guardal01.html".to_string()];
        let dir = parse_directory(&table, &links, &config()).unwrap();
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn test_season_range_validation() {
        let fetcher =
            TableFetcher::new(&table_fetcher::FetcherConfig::default()).unwrap();
        let err = DirectoryBuilder::new(fetcher, DirectoryConfig::for_season(1900)).unwrap_err();
        assert!(matches!(err, DirectoryError::Config(_)));
    }
}
