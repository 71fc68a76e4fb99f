use chrono::{Datelike, NaiveDateTime};
use serenade_core::time::RelationshipSpan;

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// "Desde 29 de maio de 2021".
#[must_use]
pub fn format_since(start: NaiveDateTime) -> String {
    let month = MONTHS
        .get(start.month0() as usize)
        .copied()
        .unwrap_or_default();
    format!("Desde {} de {month} de {}", start.day(), start.year())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterVm {
    pub subtitle: String,
    pub units: Vec<CounterUnit>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterUnit {
    pub value: String,
    pub label: &'static str,
}

fn unit(value: i64, singular: &'static str, plural: &'static str, width: usize) -> CounterUnit {
    CounterUnit {
        value: format!("{value:0width$}"),
        label: if value == 1 { singular } else { plural },
    }
}

#[must_use]
pub fn map_counter(start: NaiveDateTime, now: NaiveDateTime) -> CounterVm {
    let span = RelationshipSpan::between(start, now);
    CounterVm {
        subtitle: format!(
            "{} • {} dias juntos ❤️",
            format_since(start),
            span.total_days
        ),
        units: vec![
            unit(span.years, "ano", "anos", 1),
            unit(span.months, "mês", "meses", 1),
            unit(span.days, "dia", "dias", 1),
            unit(span.hours, "hora", "horas", 2),
            unit(span.minutes, "minuto", "minutos", 2),
            unit(span.seconds, "segundo", "segundos", 2),
        ],
    }
}
