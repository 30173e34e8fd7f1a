//! Text and JSON rendering of movies.

use marquee_core::MovieView;
use serde::Serialize;

use crate::OutputFormat;

/// Pretty JSON for any serializable value.
pub(crate) fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"serialization: {}\"}}", e))
}

/// One line per movie: id, release date, title, genre.
pub(crate) fn movie_row(view: &MovieView) -> String {
    format!(
        "{:>5}  {}  {} [{}]",
        view.id, view.release_date, view.title, view.genre
    )
}

/// Every field of one movie, one per line.
pub(crate) fn movie_detail(view: &MovieView) -> String {
    let mut lines = vec![
        format!("#{} {} ({})", view.id, view.title, view.release_date),
        format!("  directors: {}", view.directors),
        format!("  actors:    {}", view.actors),
        format!("  genre:     {}", view.genre),
        format!("  runtime:   {}", view.runtime),
    ];
    if let Some(rating) = view.rating {
        lines.push(format!("  rating:    {}", rating));
    }
    if let Some(plot) = &view.plot {
        lines.push(format!("  plot:      {}", plot));
    }
    if let Some(url) = &view.image_url {
        lines.push(format!("  image:     {}", url));
    }
    lines.join("\n")
}

pub(crate) fn print_movies(views: &[MovieView], output: OutputFormat) {
    match output {
        OutputFormat::Json => println!("{}", to_json(&views)),
        OutputFormat::Text => {
            if views.is_empty() {
                println!("no movies");
            }
            for view in views {
                println!("{}", movie_row(view));
            }
        }
    }
}

pub(crate) fn print_movie(view: &MovieView, output: OutputFormat) {
    match output {
        OutputFormat::Json => println!("{}", to_json(view)),
        OutputFormat::Text => println!("{}", movie_detail(view)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn view() -> MovieView {
        MovieView {
            id: 7,
            title: "Heat".to_string(),
            directors: "Michael Mann".to_string(),
            actors: "Al Pacino, Robert De Niro".to_string(),
            release_date: "1995-12-15".to_string(),
            genre: "Thriller".to_string(),
            runtime: "02:50:00".to_string(),
            plot: None,
            rating: Some(Decimal::new(83, 1)),
            image_url: None,
        }
    }

    #[test]
    fn row_has_id_date_title_genre() {
        assert_eq!(movie_row(&view()), "    7  1995-12-15  Heat [Thriller]");
    }

    #[test]
    fn detail_skips_absent_optionals() {
        let text = movie_detail(&view());
        assert!(text.starts_with("#7 Heat (1995-12-15)"));
        assert!(text.contains("rating:    8.3"));
        assert!(!text.contains("plot:"));
        assert!(!text.contains("image:"));
    }
}
