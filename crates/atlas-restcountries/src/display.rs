//! Formatted country output, shared between the TUI and the CLI

use colored::Colorize;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::country::{CountryDetail, CountrySummary};

/// Disambiguation list: one entry per country, name only, in response order
pub struct CountryListDisplay<'a> {
    countries: &'a [CountrySummary],
}

impl<'a> CountryListDisplay<'a> {
    pub fn new(countries: &'a [CountrySummary]) -> Self {
        Self { countries }
    }

    /// Render to CLI output, one line per country
    pub fn to_cli_lines(&self) -> Vec<String> {
        self.countries.iter().map(|c| c.name.clone()).collect()
    }

    /// Render to ratatui Lines for the TUI
    pub fn to_tui_lines(&self) -> Vec<Line<'static>> {
        self.countries
            .iter()
            .map(|c| {
                Line::from(vec![
                    Span::styled("- ", Style::default().fg(Color::DarkGray)),
                    Span::styled(c.name.clone(), Style::default().fg(Color::White)),
                ])
            })
            .collect()
    }
}

/// Single-match detail panel: heading, capital, population, languages, flag
pub struct CountryDetailDisplay<'a> {
    country: &'a CountryDetail,
}

impl<'a> CountryDetailDisplay<'a> {
    pub fn new(country: &'a CountryDetail) -> Self {
        Self { country }
    }

    /// Render to CLI output using the colored crate
    pub fn to_cli_lines(&self) -> Vec<String> {
        let c = self.country;

        let mut lines = vec![
            c.name.bold().to_string(),
            format!("{} {}", "Capital:".cyan(), c.capital),
            format!("{} {}", "Population:".cyan(), c.population),
            "Languages:".cyan().to_string(),
        ];
        for language in &c.languages {
            lines.push(format!("  - {}", language.name));
        }
        lines.push(format!(
            "{} {}",
            format!("Flag of {}:", c.name).cyan(),
            c.flag
        ));

        lines
    }

    /// Render to ratatui Lines for the TUI
    pub fn to_tui_lines(&self) -> Vec<Line<'static>> {
        let c = self.country;
        let label_style = Style::default().fg(Color::DarkGray);
        let value_style = Style::default().fg(Color::White);

        let mut lines = vec![
            Line::from(Span::styled(
                c.name.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Capital:     ", label_style),
                Span::styled(c.capital.clone(), value_style),
            ]),
            Line::from(vec![
                Span::styled("Population:  ", label_style),
                Span::styled(c.population.to_string(), value_style),
            ]),
            Line::from(Span::styled("Languages:", label_style)),
        ];
        for language in &c.languages {
            lines.push(Line::from(vec![
                Span::styled("  - ", label_style),
                Span::styled(language.name.clone(), value_style),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(format!("Flag of {}: ", c.name), label_style),
            Span::styled(
                c.flag.clone(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::Language;

    fn poland() -> CountryDetail {
        CountryDetail {
            name: "Poland".to_string(),
            capital: "Warsaw".to_string(),
            population: 38000000,
            languages: vec![Language {
                name: "Polish".to_string(),
            }],
            flag: "https://flag.example/pl.png".to_string(),
        }
    }

    #[test]
    fn test_list_lines_are_names_only_in_order() {
        let countries = vec![
            CountrySummary {
                name: "Sudan".to_string(),
            },
            CountrySummary {
                name: "South Sudan".to_string(),
            },
        ];

        let lines = CountryListDisplay::new(&countries).to_cli_lines();
        assert_eq!(lines, vec!["Sudan", "South Sudan"]);

        let tui_lines = CountryListDisplay::new(&countries).to_tui_lines();
        assert_eq!(tui_lines.len(), 2);
    }

    #[test]
    fn test_detail_cli_lines_follow_the_contract() {
        // Colors off so the contract can be compared byte for byte
        colored::control::set_override(false);

        let detail = poland();
        let lines = CountryDetailDisplay::new(&detail).to_cli_lines();

        assert_eq!(
            lines,
            vec![
                "Poland",
                "Capital: Warsaw",
                "Population: 38000000",
                "Languages:",
                "  - Polish",
                "Flag of Poland: https://flag.example/pl.png",
            ]
        );
    }

    #[test]
    fn test_detail_tui_lines_carry_every_field() {
        let detail = poland();
        let text = CountryDetailDisplay::new(&detail)
            .to_tui_lines()
            .iter()
            .flat_map(|line| line.spans.iter().map(|span| span.content.clone()))
            .collect::<Vec<_>>()
            .join("");

        assert!(text.contains("Poland"));
        assert!(text.contains("Capital:"));
        assert!(text.contains("Warsaw"));
        assert!(text.contains("Population:"));
        assert!(text.contains("38000000"));
        assert!(text.contains("Polish"));
        assert!(text.contains("Flag of Poland:"));
        assert!(text.contains("https://flag.example/pl.png"));
    }

    #[test]
    fn test_detail_with_no_languages_still_renders() {
        let detail = CountryDetail {
            name: "Bouvet Island".to_string(),
            capital: String::new(),
            population: 0,
            languages: Vec::new(),
            flag: String::new(),
        };

        colored::control::set_override(false);
        let lines = CountryDetailDisplay::new(&detail).to_cli_lines();

        assert_eq!(lines[0], "Bouvet Island");
        assert!(lines.iter().any(|l| l == "Languages:"));
    }
}
