//! Plain-text tables
//!
//! Columns are padded to their widest cell and separated by two spaces.
//! Rendering is uncoloured so the output can be compared in tests.

use nearbite_core::catalog::BlogPost;
use nearbite_search::RankedRestaurant;

/// A simple column-aligned table
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table with the given column headers
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row; missing cells render empty, extra cells are dropped
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
        self
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if there are no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render header, rule and rows
    pub fn render(&self) -> String {
        let widths: Vec<usize> = (0..self.headers.len())
            .map(|i| {
                self.rows
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(self.headers[i].chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        push_line(&mut out, &self.headers, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
        push_line(&mut out, &rule, &widths);
        for row in &self.rows {
            push_line(&mut out, row, &widths);
        }
        out
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Ranked search results, nearest first
pub fn results_table(results: &[RankedRestaurant]) -> Table {
    results.iter().enumerate().fold(
        Table::new(["#", "Name", "Cuisine", "Rating", "Price", "Distance"]),
        |table, (i, ranked)| {
            let r = &ranked.restaurant;
            table.row([
                (i + 1).to_string(),
                r.name.clone(),
                r.cuisine.clone(),
                format!("{:.1}", r.rating),
                r.price_range.clone(),
                ranked.formatted_distance(),
            ])
        },
    )
}

/// Blog post listing
pub fn blogs_table<'a>(posts: impl IntoIterator<Item = &'a BlogPost>) -> Table {
    posts.into_iter().fold(
        Table::new(["ID", "Date", "Restaurant", "Title"]),
        |table, post| {
            table.row([
                post.id.as_str(),
                post.publish_date.as_str(),
                post.restaurant_name.as_str(),
                post.title.as_str(),
            ])
        },
    )
}

/// Full text of one blog post
pub fn render_blog(post: &BlogPost) -> String {
    let mut out = format!(
        "{}\n{} · {} · {}\n",
        post.title, post.restaurant_name, post.author, post.publish_date
    );
    if !post.tags.is_empty() {
        out.push_str(&format!("Tags: {}\n", post.tags.join(", ")));
    }
    out.push('\n');
    out.push_str(post.content.trim_end());
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use nearbite_search::Restaurant;

    fn ranked(name: &str, rating: f64, price: &str, distance: f64) -> RankedRestaurant {
        RankedRestaurant {
            restaurant: Restaurant::new("1", name, "Thai", rating, price, 0.0, 0.0),
            distance,
        }
    }

    #[test]
    fn test_table_alignment() {
        let rendered = Table::new(["A", "Long header"])
            .row(["wide cell", "x"])
            .row(["y", "z"])
            .render();

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "A          Long header");
        assert_eq!(lines[2], "wide cell  x");
        assert_eq!(lines[3], "y          z");
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = Table::new(["A", "B", "C"]).row(["1"]);
        assert_eq!(table.len(), 1);
        assert!(table.render().lines().nth(2).unwrap().starts_with('1'));
    }

    #[test]
    fn test_results_table() {
        let results = [
            ranked("Kin Dee", 4.6, "$$", 0.42),
            ranked("Street to Kitchen", 4.8, "$$$", 3.21),
        ];
        let rendered = results_table(&results).render();

        assert!(rendered.contains("Kin Dee"));
        assert!(rendered.contains("420m"));
        assert!(rendered.contains("3.2 km"));
        assert!(rendered.lines().nth(3).unwrap().starts_with("2  Street to Kitchen"));
    }

    #[test]
    fn test_render_blog() {
        let post = BlogPost {
            id: "b1".to_string(),
            restaurant_id: "1".to_string(),
            restaurant_name: "Kin Dee".to_string(),
            title: "Khao soi in the Heights".to_string(),
            content: "Worth the wait.\n".to_string(),
            author: "Priya".to_string(),
            publish_date: "2024-02-10".to_string(),
            tags: vec!["thai".to_string()],
            image_url: None,
        };

        let rendered = render_blog(&post);
        assert!(rendered.starts_with("Khao soi in the Heights\n"));
        assert!(rendered.contains("Tags: thai"));
        assert!(rendered.ends_with("Worth the wait.\n"));
        assert_eq!(blogs_table([&post]).len(), 1);
    }
}
