//! # CountryTable Component
//!
//! Renders one page of countries. Stateless: the page slice is a prop.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Cell, Row, Table};

use crate::source::Country;
use crate::tui::component::Component;

pub struct CountryTable<'a> {
    pub records: &'a [&'a Country],
    /// Whether the table has keyboard focus (Prop)
    pub focused: bool,
}

impl<'a> CountryTable<'a> {
    pub fn new(records: &'a [&'a Country], focused: bool) -> Self {
        Self { records, focused }
    }
}

impl Component for CountryTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let header = Row::new(["Country", "Code", "Continent", "Currency"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(0);

        let rows: Vec<Row> = if self.records.is_empty() {
            vec![Row::new([Cell::from("No results.")])
                .style(Style::default().fg(Color::DarkGray))]
        } else {
            self.records
                .iter()
                .enumerate()
                .map(|(i, country)| {
                    // Zebra striping
                    let style = if i % 2 == 1 {
                        Style::default().bg(Color::Rgb(30, 30, 30))
                    } else {
                        Style::default()
                    };
                    Row::new([
                        Cell::from(country.name.as_str()),
                        Cell::from(country.code.as_str()),
                        Cell::from(country.continent_label()),
                        Cell::from(country.currency_label()),
                    ])
                    .style(style)
                })
                .collect()
        };

        let widths = [
            Constraint::Fill(3),
            Constraint::Length(6),
            Constraint::Fill(2),
            Constraint::Length(16),
        ];

        let border = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::bordered().border_style(border));

        frame.render_widget(table, area);
    }
}
