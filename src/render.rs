//! Table row rendering for a single catalog group

use std::path::Path;

use crate::types::{Group, AUTHOR, CATEGORY, DESCRIPTION, GENRE, PRICE, TAGS, THUMBNAIL};

const NOT_AVAILABLE: &str = "N/A";

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Trimmed value, or "N/A" when nothing is left
fn text_or_na(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        NOT_AVAILABLE
    } else {
        trimmed
    }
}

/// Clickable filter chips from a comma-separated list
pub fn make_chips(cell: &str) -> String {
    let chips: Vec<String> = cell
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(|tag| format!(r##"<a href="#" class="filter-chip">{}</a>"##, html_escape(tag)))
        .collect();

    if chips.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        chips.join(" ")
    }
}

fn percent_decode(value: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(value.as_bytes())).into_owned()
}

/// Thumbnail with a hover zoom copy, only if the decoded path exists locally
fn cover_cell(thumbnail: &str) -> String {
    let decoded = percent_decode(thumbnail);
    if decoded.is_empty() || !Path::new(&decoded).exists() {
        return NOT_AVAILABLE.to_string();
    }

    let src = html_escape(&decoded);
    format!(
        r#"<div class="thumb-wrapper"><img class="thumb" src="{}"><img class="zoomed" src="{}"></div>"#,
        src, src
    )
}

fn title_cell(group: &Group) -> String {
    let first = group.representative();

    let name = if group.key.name.is_empty() {
        NOT_AVAILABLE
    } else {
        group.key.name.as_str()
    };
    let link = if group.key.link.is_empty() {
        "#"
    } else {
        group.key.link.as_str()
    };
    let suffix = if group.count() > 1 {
        format!(" ({})", group.count())
    } else {
        String::new()
    };

    let description = html_escape(first.field(DESCRIPTION));
    let details = if description.is_empty() {
        String::new()
    } else {
        format!(
            r#"<details style="margin-top:4px;"><summary style="cursor:pointer;">Description</summary><div style="margin-top:6px; white-space:pre-wrap; font-size:0.9em; line-height:1.4;">{}</div></details>"#,
            description
        )
    };

    format!(
        r#"<a href="{}" target="_blank">{}{}</a>{}"#,
        html_escape(link),
        html_escape(name),
        suffix,
        details
    )
}

/// Render one `<tr>` with the seven catalog columns.
///
/// Only the representative record is consulted; later duplicates contribute
/// nothing but the count suffix on the title.
pub fn render_row(group: &Group) -> String {
    let first = group.representative();

    let cover = cover_cell(first.field(THUMBNAIL));
    let title = title_cell(group);
    // Author stays empty rather than "N/A"
    let author = html_escape(first.field(AUTHOR));
    let category = make_chips(first.field(CATEGORY));
    let genre = make_chips(first.field(GENRE));
    let tags = make_chips(first.field(TAGS));
    let price = html_escape(text_or_na(first.field(PRICE)));

    format!(
        r#"
        <tr>
          <td>{}</td>
          <td>{}</td>
          <td>{}</td>
          <td>{}</td>
          <td>{}</td>
          <td>{}</td>
          <td>{}</td>
        </tr>"#,
        cover, title, author, category, genre, tags, price
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Record, GAME_NAME, GAME_PAGE_LINK};
    use std::fs;
    use tempfile::tempdir;

    fn group_of(fields: &[(&str, &str)], copies: usize) -> Group {
        let record: Record = fields.iter().copied().collect();
        let mut group = Group::new(record.group_key(), record.clone());
        for _ in 1..copies {
            group.push(record.clone());
        }
        group
    }

    fn cells(row: &str) -> Vec<&str> {
        row.split("<td>")
            .skip(1)
            .map(|cell| cell.split("</td>").next().unwrap_or(""))
            .collect()
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_make_chips() {
        assert_eq!(
            make_chips("Action, Puzzle"),
            r##"<a href="#" class="filter-chip">Action</a> <a href="#" class="filter-chip">Puzzle</a>"##
        );
        assert_eq!(make_chips(""), "N/A");
        assert_eq!(make_chips("  "), "N/A");
        assert_eq!(make_chips(" , ,,"), "N/A");
        assert_eq!(
            make_chips("R&D,"),
            r##"<a href="#" class="filter-chip">R&amp;D</a>"##
        );
    }

    #[test]
    fn test_row_has_seven_cells() {
        let row = render_row(&group_of(&[(GAME_NAME, "Celeste")], 1));
        assert!(row.starts_with("\n        <tr>"));
        assert!(row.ends_with("</tr>"));
        assert_eq!(cells(&row).len(), 7);
    }

    #[test]
    fn test_defaults_for_empty_record() {
        let row = render_row(&group_of(&[], 1));
        let cells = cells(&row);
        assert_eq!(cells[0], "N/A");
        assert_eq!(cells[1], r##"<a href="#" target="_blank">N/A</a>"##);
        assert_eq!(cells[2], "");
        assert_eq!(cells[3], "N/A");
        assert_eq!(cells[4], "N/A");
        assert_eq!(cells[5], "N/A");
        assert_eq!(cells[6], "N/A");
    }

    #[test]
    fn test_count_suffix_only_for_duplicates() {
        let fields = [(GAME_NAME, "Celeste"), (GAME_PAGE_LINK, "https://mmg.itch.io/celeste")];

        let single = render_row(&group_of(&fields, 1));
        assert!(single.contains(r#"<a href="https://mmg.itch.io/celeste" target="_blank">Celeste</a>"#));

        let triple = render_row(&group_of(&fields, 3));
        assert!(triple.contains(r#"target="_blank">Celeste (3)</a>"#));
    }

    #[test]
    fn test_markup_in_fields_is_escaped() {
        let row = render_row(&group_of(
            &[
                (GAME_NAME, "<script>alert(1)</script>"),
                (GAME_PAGE_LINK, r#"https://x/?a=1&b="2""#),
                (AUTHOR, "Tom & Jerry"),
                (PRICE, "<$5>"),
            ],
            1,
        ));
        assert!(!row.contains("<script>"));
        assert!(row.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(row.contains(r#"href="https://x/?a=1&amp;b=&quot;2&quot;""#));
        assert!(row.contains("<td>Tom &amp; Jerry</td>"));
        assert!(row.contains("<td>&lt;$5&gt;</td>"));
    }

    #[test]
    fn test_description_details() {
        let with = render_row(&group_of(&[(GAME_NAME, "A"), (DESCRIPTION, "Line 1\n<i>Line 2</i>")], 1));
        assert!(with.contains("<summary style=\"cursor:pointer;\">Description</summary>"));
        assert!(with.contains("Line 1\n&lt;i&gt;Line 2&lt;/i&gt;</div></details>"));

        let without = render_row(&group_of(&[(GAME_NAME, "A")], 1));
        assert!(!without.contains("<details"));
    }

    #[test]
    fn test_price_is_trimmed() {
        let row = render_row(&group_of(&[(PRICE, "  $4.99 ")], 1));
        assert_eq!(cells(&row)[6], "$4.99");
    }

    #[test]
    fn test_cover_requires_existing_file() {
        let dir = tempdir().unwrap();
        let image = dir.path().join("my cover.png");
        fs::write(&image, b"png").unwrap();
        let encoded = image.to_string_lossy().replace(' ', "%20");

        let row = render_row(&group_of(&[(THUMBNAIL, encoded.as_str())], 1));
        let decoded = html_escape(&image.to_string_lossy());
        assert_eq!(
            cells(&row)[0],
            format!(
                r#"<div class="thumb-wrapper"><img class="thumb" src="{0}"><img class="zoomed" src="{0}"></div>"#,
                decoded
            )
        );

        let missing = dir.path().join("missing.png").to_string_lossy().into_owned();
        let row = render_row(&group_of(&[(THUMBNAIL, missing.as_str())], 1));
        assert_eq!(cells(&row)[0], "N/A");
    }

    #[test]
    fn test_percent_decode_is_lossy() {
        assert_eq!(percent_decode("a%20b+c"), "a b+c");
        assert_eq!(percent_decode("%FF"), "\u{FFFD}");
    }
}
