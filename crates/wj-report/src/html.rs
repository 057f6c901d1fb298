//! HTML generation for the yearly report.

use std::collections::BTreeSet;

use wj_model::{GlobalStats, JourneyStats, LeaderStats, MultiLeaderSong, RankedSong};

/// Render the complete report as one self-contained HTML document.
///
/// Songs that are new for the year carry a dot indicator wherever they
/// appear; newness is decided once, from the global new-song list.
pub fn render_report(stats: &JourneyStats) -> String {
    let new_songs: BTreeSet<String> = stats.global.new_songs.iter().cloned().collect();
    let leader_sections: String = stats
        .leaders
        .iter()
        .map(|leader| leader_section(leader, &new_songs))
        .collect();
    let global_section = global_section(&stats.global, &new_songs);
    let year = stats.global.year;
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Worship Journey {year}</title>
<style>
{css}
</style>
</head>
<body>
<header class="hero">
<h1>Worship Journey {year}</h1>
<p class="subtitle">Statistics on the selection of praise songs</p>
</header>
<main>
<section id="leaders" class="section">
<h2>Praise Leaders</h2>
{leader_sections}
</section>
<section id="global" class="section">
<h2>Praise History</h2>
{global_section}
</section>
</main>
<footer>
<p>Worship Journey {year} &middot; generated from the praise history sheet</p>
</footer>
<script>
{js}
</script>
</body>
</html>
"#,
        css = CSS,
        js = JS,
    )
}

fn leader_section(stats: &LeaderStats, new_songs: &BTreeSet<String>) -> String {
    let overlaps = if stats.top_overlaps.is_empty() {
        "<p class=\"no-data\">No overlap with other leaders</p>".to_string()
    } else {
        let items: String = stats
            .top_overlaps
            .iter()
            .map(|overlap| {
                format!(
                    "<li><span>{}</span><span class=\"badge\">{} songs</span></li>\n",
                    escape(&overlap.leader),
                    overlap.shared
                )
            })
            .collect();
        format!("<ul class=\"overlap-list\">\n{items}</ul>\n")
    };
    format!(
        r#"<article class="leader-card">
<header class="leader-header" onclick="toggleCard(this)">
<h3>{name}</h3>
<div class="summary">
<span><b>{services}</b> services</span>
<span><b>{songs}</b> songs</span>
<span><b>{common}</b> songs in common with others</span>
</div>
</header>
<div class="card-body">
<h4>Top Praise 1 Songs</h4>
{praise1}
<h4>Top Praise 2 Songs</h4>
{praise2}
<h4>Top Peace Songs</h4>
{peace}
<h4>Top Songs Combined</h4>
{combined}
<h4>New Songs This Year</h4>
{new_list}
<h4>Most Similar Leaders</h4>
{overlaps}
</div>
</article>
"#,
        name = escape(&stats.name),
        services = stats.total_services,
        songs = stats.total_songs,
        common = stats.common_songs_count,
        praise1 = songs_table(&stats.praise1_top, new_songs),
        praise2 = songs_table(&stats.praise2_top, new_songs),
        peace = songs_table(&stats.peace_top, new_songs),
        combined = songs_table(&stats.combined_top, new_songs),
        new_list = song_list(&stats.new_songs, new_songs),
    )
}

fn global_section(stats: &GlobalStats, new_songs: &BTreeSet<String>) -> String {
    format!(
        r#"<div class="highlight">
<h3>Total Unique Songs</h3>
<div class="big-number">{unique}</div>
</div>
<p class="legend"><span class="new-song">&#9679;</span> marks a song that first appeared this year</p>
{p1}
{p2}
{combined}
{multi}
{peace}
{new_songs_block}
{dropped}
{usage}
{all_songs}
{publishers}
"#,
        unique = stats.total_unique_songs,
        p1 = collapsible("Top Praise 1 Songs", &songs_table(&stats.praise1_top, new_songs)),
        p2 = collapsible("Top Praise 2 Songs", &songs_table(&stats.praise2_top, new_songs)),
        combined = collapsible(
            "Top Praise 1 &amp; 2 Combined",
            &songs_table(&stats.combined_top, new_songs),
        ),
        multi = collapsible(
            "Multi-Leader Songs",
            &multi_leader_table(&stats.multi_leader_top, new_songs),
        ),
        peace = collapsible("Top Peace Songs", &songs_table(&stats.peace_top, new_songs)),
        new_songs_block = collapsible("New Songs", &song_list(&stats.new_songs, new_songs)),
        dropped = collapsible(
            "Songs From Last Year Not Continued",
            &song_list(&stats.dropped_songs, new_songs),
        ),
        usage = format!(
            "<p class=\"note\">{} services introduced at least one new song</p>\n",
            stats.new_songs_usage
        ),
        all_songs = collapsible("All Songs", &song_list(&stats.unique_songs, new_songs)),
        publishers = collapsible("Publishers", &publisher_table(stats)),
    )
}

fn collapsible(title: &str, body: &str) -> String {
    format!(
        "<div class=\"collapsible collapsed\">\n<h4 class=\"collapsible-header\" \
         onclick=\"toggleSection(this)\">{title}</h4>\n<div class=\"collapsible-body\">\n{body}</div>\n</div>\n"
    )
}

fn songs_table(songs: &[RankedSong], new_songs: &BTreeSet<String>) -> String {
    if songs.is_empty() {
        return "<p class=\"no-data\">No data available</p>\n".to_string();
    }
    let mut out = String::from(
        "<table class=\"stats-table\"><thead><tr><th>Rank</th><th>Song</th><th>Count</th></tr></thead><tbody>\n",
    );
    for (idx, song) in songs.iter().enumerate() {
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            idx + 1,
            song_label(&song.name, new_songs),
            song.count
        ));
    }
    out.push_str("</tbody></table>\n");
    out
}

fn multi_leader_table(songs: &[MultiLeaderSong], new_songs: &BTreeSet<String>) -> String {
    if songs.is_empty() {
        return "<p class=\"no-data\">No songs chosen by several leaders</p>\n".to_string();
    }
    let mut out = String::from(
        "<table class=\"stats-table\"><thead><tr><th>Rank</th><th>Song</th><th>Leaders</th><th>Total</th><th>Leader Names</th></tr></thead><tbody>\n",
    );
    for (idx, song) in songs.iter().enumerate() {
        let leaders: Vec<String> = song.leaders.iter().map(|name| escape(name)).collect();
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            idx + 1,
            song_label(&song.name, new_songs),
            song.leader_count,
            song.count,
            leaders.join(", ")
        ));
    }
    out.push_str("</tbody></table>\n");
    out
}

fn publisher_table(stats: &GlobalStats) -> String {
    let mut out = String::from(
        "<table class=\"stats-table\"><thead><tr><th>Publisher</th><th>Songs</th></tr></thead><tbody>\n",
    );
    for entry in &stats.publisher_tally {
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            escape(&entry.publisher),
            entry.songs
        ));
    }
    out.push_str("</tbody></table>\n<ul class=\"song-list\">\n");
    for entry in &stats.song_publishers {
        out.push_str(&format!(
            "<li>{} &mdash; {}</li>\n",
            escape(&entry.song),
            escape(&entry.publisher)
        ));
    }
    out.push_str("</ul>\n");
    out
}

fn song_list(songs: &[String], new_songs: &BTreeSet<String>) -> String {
    if songs.is_empty() {
        return "<p class=\"no-data\">No songs in this category</p>\n".to_string();
    }
    let mut out = String::from("<ul class=\"song-list\">\n");
    for song in songs {
        out.push_str(&format!("<li>{}</li>\n", song_label(song, new_songs)));
    }
    out.push_str("</ul>\n");
    out
}

fn song_label(name: &str, new_songs: &BTreeSet<String>) -> String {
    if new_songs.contains(name) {
        format!(
            "<span class=\"new-song\" title=\"First appeared this year\">&#9679;</span> {}",
            escape(name)
        )
    } else {
        escape(name)
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

const CSS: &str = r#"* { margin: 0; padding: 0; box-sizing: border-box; }
body {
  font-family: -apple-system, "Segoe UI", Roboto, "Helvetica Neue", Arial,
    "Noto Sans CJK TC", "Microsoft YaHei", sans-serif;
  line-height: 1.6; color: #333; background: #f9f9f9;
}
.hero {
  background: linear-gradient(135deg, #2c3e50 0%, #3498db 100%);
  color: white; padding: 3rem 2rem; text-align: center;
}
.subtitle { opacity: 0.9; }
main { max-width: 1100px; margin: 0 auto; padding: 2rem; }
.section { margin-bottom: 3rem; }
.section h2 { color: #2c3e50; margin-bottom: 1.5rem; }
.leader-card {
  background: white; border-radius: 8px; margin-bottom: 1.5rem;
  box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1); overflow: hidden;
}
.leader-header {
  background: linear-gradient(135deg, #f39c12 0%, #e67e22 100%);
  color: white; padding: 1.25rem 1.5rem; cursor: pointer; user-select: none;
}
.leader-header .summary { display: flex; gap: 1.5rem; flex-wrap: wrap; font-size: 0.9rem; }
.card-body { padding: 1.5rem; }
.leader-card.collapsed .card-body { display: none; }
.card-body h4, .collapsible-header {
  color: #2c3e50; margin: 1.25rem 0 0.5rem;
  border-bottom: 2px solid #f39c12; padding-bottom: 0.25rem;
}
.collapsible { background: white; border: 1px solid #e0e0e0; border-radius: 8px; margin-bottom: 1rem; }
.collapsible-header { margin: 0; padding: 0.75rem 1.25rem; cursor: pointer; user-select: none; border-bottom: none; }
.collapsible-body { padding: 1rem 1.25rem; }
.collapsible.collapsed .collapsible-body { display: none; }
.stats-table { width: 100%; border-collapse: collapse; }
.stats-table th { background: #2c3e50; color: white; padding: 0.5rem; text-align: left; }
.stats-table td { padding: 0.5rem; border-bottom: 1px solid #eee; }
.stats-table tbody tr:nth-child(even) { background: #fafafa; }
.song-list { list-style: none; display: grid; grid-template-columns: repeat(auto-fill, minmax(250px, 1fr)); gap: 0.5rem; }
.song-list li { background: #f0f0f0; padding: 0.4rem 0.8rem; border-radius: 4px; border-left: 3px solid #f39c12; }
.overlap-list { list-style: none; }
.overlap-list li { display: flex; justify-content: space-between; background: #f8f9fa; padding: 0.6rem 1rem; border-radius: 4px; margin-bottom: 0.5rem; }
.badge { background: #f39c12; color: white; padding: 0.1rem 0.7rem; border-radius: 12px; font-size: 0.85rem; }
.highlight { background: linear-gradient(135deg, #3498db 0%, #2c3e50 100%); color: white; padding: 2rem; border-radius: 8px; text-align: center; margin-bottom: 1.5rem; }
.big-number { font-size: 3rem; font-weight: bold; }
.new-song { color: #e74c3c; font-size: 0.8em; cursor: help; }
.legend, .note { color: #666; font-style: italic; margin-bottom: 1rem; }
.no-data { color: #999; font-style: italic; padding: 0.5rem 0; }
footer { background: #2c3e50; color: white; text-align: center; padding: 1.5rem; margin-top: 3rem; }
"#;

const JS: &str = r#"function toggleCard(header) {
  header.parentElement.classList.toggle('collapsed');
}
function toggleSection(header) {
  header.parentElement.classList.toggle('collapsed');
}
document.addEventListener('DOMContentLoaded', function () {
  document.querySelectorAll('.leader-card').forEach(function (card) {
    card.classList.add('collapsed');
  });
});
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use wj_model::{LeaderOverlap, PublisherTally, SongPublisher};

    fn global() -> GlobalStats {
        GlobalStats {
            year: 2025,
            total_services: 2,
            total_unique_songs: 2,
            praise1_top: vec![RankedSong {
                name: "Cornerstone".to_string(),
                count: 2,
            }],
            praise2_top: vec![],
            combined_top: vec![],
            multi_leader_top: vec![],
            peace_top: vec![],
            new_songs: vec!["新歌".to_string()],
            dropped_songs: vec![],
            new_songs_usage: 1,
            unique_songs: vec!["Cornerstone".to_string(), "新歌".to_string()],
            song_publishers: vec![SongPublisher {
                song: "Cornerstone".to_string(),
                publisher: "Hillsong Music Publishing".to_string(),
            }],
            publisher_tally: vec![PublisherTally {
                publisher: "Hillsong Music Publishing".to_string(),
                songs: 1,
            }],
        }
    }

    #[test]
    fn songs_table_renders_ranked_rows() {
        let songs = vec![RankedSong {
            name: "Cornerstone".to_string(),
            count: 3,
        }];
        insta::assert_snapshot!(songs_table(&songs, &BTreeSet::new()), @r#"
        <table class="stats-table"><thead><tr><th>Rank</th><th>Song</th><th>Count</th></tr></thead><tbody>
        <tr><td>1</td><td>Cornerstone</td><td>3</td></tr>
        </tbody></table>
        "#);
    }

    #[test]
    fn new_songs_carry_the_dot_indicator() {
        let new_songs: BTreeSet<String> = ["新歌".to_string()].into();
        let label = song_label("新歌", &new_songs);
        assert!(label.contains("&#9679;"));
        assert!(label.contains("新歌"));
        assert!(!song_label("舊歌", &new_songs).contains("&#9679;"));
    }

    #[test]
    fn markup_in_names_is_escaped() {
        assert_eq!(escape("A & B <i>"), "A &amp; B &lt;i&gt;");
    }

    #[test]
    fn report_contains_leader_and_global_sections() {
        let stats = JourneyStats {
            leaders: vec![LeaderStats {
                name: "Phoebe".to_string(),
                total_services: 2,
                total_songs: 6,
                praise1_top: vec![],
                praise2_top: vec![],
                peace_top: vec![],
                combined_top: vec![],
                new_songs: vec!["新歌".to_string()],
                common_songs_count: 1,
                top_overlaps: vec![LeaderOverlap {
                    leader: "Ken".to_string(),
                    shared: 3,
                }],
            }],
            global: global(),
        };
        let html = render_report(&stats);
        assert!(html.contains("Worship Journey 2025"));
        assert!(html.contains("Phoebe"));
        assert!(html.contains("Total Unique Songs"));
        assert!(html.contains("Hillsong Music Publishing"));
        assert!(html.contains("1 services introduced at least one new song"));
    }
}
