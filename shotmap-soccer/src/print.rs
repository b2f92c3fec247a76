use stanza::style::HAlign::Left;
use stanza::style::{HAlign, Header, MinWidth, Styles};
use stanza::table::{Col, Row, Table};
use strum::IntoEnumIterator;

use crate::domain::{Match, ShotOutcome};
use crate::plot::ShotMap;
use crate::stats::{OutcomeBreakdown, ShotSummary};

pub fn tabulate_outcomes(breakdown: &OutcomeBreakdown) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(12)).with(Left)),
            Col::new(Styles::default().with(MinWidth(5)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Outcome".into(), "Shots".into(), "%".into()],
        ));
    for row in &breakdown.rows {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                row.key.clone().into(),
                format!("{}", row.count).into(),
                format!("{:.2}", row.percent).into(),
            ],
        ));
    }
    table
}

pub fn tabulate_summary(summary: &ShotSummary) -> Table {
    let mut table = Table::default().with_cols(vec![
        Col::new(Styles::default().with(MinWidth(12)).with(Left)),
        Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
    ]);
    let rows = [
        ("Shots", format!("{}", summary.shots)),
        ("Goals", format!("{}", summary.goals)),
        ("Conversion", format!("{:.1}%", summary.conversion() * 100.0)),
        ("xG", format!("{:.2}", summary.total_xg)),
        ("xG/shot", format!("{:.3}", summary.xg_per_shot())),
        ("Goals - xG", format!("{:+.2}", summary.goals_minus_xg())),
    ];
    for (label, value) in rows {
        table.push_row(Row::new(Styles::default(), vec![label.into(), value.into()]));
    }
    table
}

pub fn tabulate_matches(matches: &[&Match], processed: &[u64]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(Left)),
            Col::new(Styles::default().with(MinWidth(30)).with(Left)),
            Col::new(Styles::default().with(MinWidth(9)).with(Left)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Match".into(), "Date".into(), "Fixture".into(), "Processed".into()],
        ));
    for m in matches {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("{}", m.id).into(),
                m.date
                    .map(|date| date.to_string())
                    .unwrap_or_default()
                    .into(),
                m.fixture().into(),
                if processed.contains(&m.id) { "yes" } else { "no" }.into(),
            ],
        ));
    }
    table
}

pub fn tabulate_plot(map: &ShotMap) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(12)).with(Left)),
            Col::new(Styles::default().with(MinWidth(10)).with(Left)),
            Col::new(Styles::default().with(MinWidth(7)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Outcome".into(), "Marker".into(), "Plotted".into()],
        ));
    for outcome in ShotOutcome::iter() {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                outcome.to_string().into(),
                format!("{:?}", outcome.marker()).into(),
                format!("{}", map.plotted(outcome)).into(),
            ],
        ));
    }
    for row in &map.dropped {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                row.key.clone().into(),
                "-".into(),
                format!("0 of {}", row.count).into(),
            ],
        ));
    }
    table
}
