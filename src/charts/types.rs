use plotters::style::{RGBColor, BLUE, RED};

use crate::payload::SessionRecord;

#[derive(Clone, Copy)]
pub(super) enum ChartKind {
    Line,
    GroupedBar,
}

#[derive(Clone, Copy)]
pub(super) struct SeriesDef {
    pub label: &'static str,
    pub color: RGBColor,
    pub value: fn(&SessionRecord) -> f64,
}

#[derive(Clone, Copy)]
pub(super) struct ChartDef {
    pub kind: ChartKind,
    pub title: &'static str,
    pub x_desc: &'static str,
    pub y_desc: &'static str,
    pub first: SeriesDef,
    pub second: SeriesDef,
}

fn planned(record: &SessionRecord) -> f64 {
    record.study_time
}

fn actual(record: &SessionRecord) -> f64 {
    record.actual_study_time
}

fn rest(record: &SessionRecord) -> f64 {
    record.rest_time
}

/// The four charts, in emission order. The line and bar variants of the same
/// comparison deliberately differ in which series is red and which is blue.
pub(super) fn chart_catalog() -> [ChartDef; 4] {
    [
        ChartDef {
            kind: ChartKind::Line,
            title: "Set vs Actual Study Times",
            x_desc: "Study Date",
            y_desc: "Study Times",
            first: SeriesDef {
                label: "Set study time",
                color: BLUE,
                value: planned,
            },
            second: SeriesDef {
                label: "Actual study time",
                color: RED,
                value: actual,
            },
        },
        ChartDef {
            kind: ChartKind::Line,
            title: "Actual Study Time vs Rest Time",
            x_desc: "Study Date",
            y_desc: "Time Values",
            first: SeriesDef {
                label: "Actual study time",
                color: RED,
                value: actual,
            },
            second: SeriesDef {
                label: "Rest time",
                color: BLUE,
                value: rest,
            },
        },
        ChartDef {
            kind: ChartKind::GroupedBar,
            title: "Study Time vs Actual Study Time",
            x_desc: "",
            y_desc: "Values",
            first: SeriesDef {
                label: "Set Study Time",
                color: RED,
                value: planned,
            },
            second: SeriesDef {
                label: "Actual Study Time",
                color: BLUE,
                value: actual,
            },
        },
        ChartDef {
            kind: ChartKind::GroupedBar,
            title: "Actual Study Time vs Rest Time",
            x_desc: "",
            y_desc: "Values",
            first: SeriesDef {
                label: "Actual Study Time",
                color: RED,
                value: actual,
            },
            second: SeriesDef {
                label: "Rest Time",
                color: BLUE,
                value: rest,
            },
        },
    ]
}
