//! Output formatter implementations.

use crate::reservation::DraftField;
use crate::{Error, Reservation, Result, ServiceCatalog};

use super::{paint, OutputFormatter, Theme, EMPTY_LIST_MESSAGE};

/// Column headers for table output.
const COLUMN_HEADERS: [&str; 6] = ["ID", "NAME", "EMAIL", "DATE", "TIME", "SERVICE"];

/// Tab-separated table with a header row.
pub struct TableFormatter {
    theme: Theme,
    colored: bool,
}

impl TableFormatter {
    /// Create a table formatter.
    #[must_use]
    pub const fn new(theme: Theme, colored: bool) -> Self {
        Self { theme, colored }
    }
}

impl OutputFormatter for TableFormatter {
    fn format(&self, reservations: &[Reservation], catalog: &ServiceCatalog) -> Result<String> {
        let header = paint(
            &COLUMN_HEADERS.join("\t"),
            self.theme.label_style(),
            self.colored,
        );
        let mut lines = vec![header];

        for r in reservations {
            lines.push(format!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                r.id,
                or_dash(&r.name),
                or_dash(&r.email),
                or_dash(&r.date),
                or_dash(&r.time),
                catalog.display(&r.service),
            ));
        }

        Ok(lines.join("\n"))
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

/// One block per reservation with labelled fields.
///
/// # Examples
///
/// ```
/// use booking::output::{CardFormatter, OutputFormatter, Theme};
/// use booking::{Draft, DraftField, ReservationRepository, ReservationStore, ServiceCatalog};
///
/// let mut store = ReservationStore::new();
/// let mut draft = Draft::default();
/// draft.set(DraftField::Name, "Ana");
/// draft.set(DraftField::Service, "Haircut");
/// store.insert(draft);
///
/// let out = CardFormatter::new(Theme::Light, false)
///     .format(&store.list(), &ServiceCatalog::default())
///     .unwrap();
/// assert!(out.contains("Name: Ana"));
/// assert!(out.contains("Service: Veterinaria"));
/// ```
pub struct CardFormatter {
    theme: Theme,
    colored: bool,
}

impl CardFormatter {
    /// Create a card formatter.
    #[must_use]
    pub const fn new(theme: Theme, colored: bool) -> Self {
        Self { theme, colored }
    }

    fn card(&self, reservation: &Reservation, catalog: &ServiceCatalog) -> String {
        let mut lines = vec![paint(
            &format!("#{}", reservation.id),
            self.theme.label_style(),
            self.colored,
        )];

        for field in DraftField::ALL {
            let raw = reservation.field(field);
            let value = if field == DraftField::Service {
                catalog.display(raw)
            } else {
                raw
            };
            lines.push(format!(
                "  {} {}",
                paint(&format!("{}:", field.label()), self.theme.label_style(), self.colored),
                paint(value, self.theme.value_style(), self.colored),
            ));
        }

        lines.join("\n")
    }
}

impl OutputFormatter for CardFormatter {
    fn format(&self, reservations: &[Reservation], catalog: &ServiceCatalog) -> Result<String> {
        if reservations.is_empty() {
            return Ok(paint(
                EMPTY_LIST_MESSAGE,
                self.theme.notice_style(),
                self.colored,
            ));
        }

        Ok(reservations
            .iter()
            .map(|r| self.card(r, catalog))
            .collect::<Vec<_>>()
            .join("\n\n"))
    }
}

/// Formatter for JSON output.
///
/// Each object carries the stored service value plus its display label.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, reservations: &[Reservation], catalog: &ServiceCatalog) -> Result<String> {
        let json_data: Vec<serde_json::Value> = reservations
            .iter()
            .map(|r| {
                serde_json::json!({
                    "id": r.id,
                    "name": r.name,
                    "email": r.email,
                    "date": r.date,
                    "time": r.time,
                    "service": r.service,
                    "service_label": catalog.label_for(&r.service),
                })
            })
            .collect();

        serde_json::to_string_pretty(&json_data).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}
