//! CSV rendering of the reporting relations.
//!
//! Column layouts follow the downstream spreadsheet consumers:
//! fulfillment rows carry `Warehouse,Product,Order,Supply Quantity`
//! and stock rows carry
//! `Warehouse,Product,Initial Stock,Supplied Stock,Remaining Stock`.
//! Identifiers are written verbatim, without quoting.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use stockwise_core::report::SourcingReport;

use crate::aggregate::RouteAllocation;

/// CSV exporter for the fulfillment relation.
///
/// # Example
///
/// ```
/// use stockwise_core::report::{FulfillmentRecord, SourcingReport};
/// use stockwise_report::FulfillmentCsv;
///
/// let report = SourcingReport {
///     fulfillment: vec![FulfillmentRecord {
///         warehouse: "W1".into(),
///         product: "P1".into(),
///         order: "O1".into(),
///         quantity: 5,
///     }],
///     stock_status: Vec::new(),
/// };
///
/// let csv = FulfillmentCsv::to_string(&report);
/// assert!(csv.contains("Warehouse,Product,Order,Supply Quantity"));
/// assert!(csv.contains("W1,P1,O1,5"));
/// ```
pub struct FulfillmentCsv;

impl FulfillmentCsv {
    /// Renders the fulfillment relation to a CSV string.
    pub fn to_string(report: &SourcingReport) -> String {
        let mut output = String::new();

        writeln!(output, "Warehouse,Product,Order,Supply Quantity").unwrap();
        for row in &report.fulfillment {
            writeln!(
                output,
                "{},{},{},{}",
                row.warehouse, row.product, row.order, row.quantity
            )
            .unwrap();
        }

        output
    }

    /// Writes the fulfillment relation to a CSV file.
    pub fn to_file(report: &SourcingReport, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(report))
    }

    /// Writes the fulfillment relation as CSV to a writer.
    pub fn write<W: Write>(report: &SourcingReport, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(report).as_bytes())
    }
}

/// CSV exporter for the stock status relation.
///
/// # Example
///
/// ```
/// use stockwise_core::report::{SourcingReport, StockStatusRecord};
/// use stockwise_report::StockStatusCsv;
///
/// let report = SourcingReport {
///     fulfillment: Vec::new(),
///     stock_status: vec![StockStatusRecord {
///         warehouse: "W1".into(),
///         product: "P1".into(),
///         initial: 5,
///         supplied: 5,
///         remaining: 0,
///     }],
/// };
///
/// let csv = StockStatusCsv::to_string(&report);
/// assert!(csv.contains("Initial Stock,Supplied Stock,Remaining Stock"));
/// assert!(csv.contains("W1,P1,5,5,0"));
/// ```
pub struct StockStatusCsv;

impl StockStatusCsv {
    /// Renders the stock status relation to a CSV string.
    pub fn to_string(report: &SourcingReport) -> String {
        let mut output = String::new();

        writeln!(
            output,
            "Warehouse,Product,Initial Stock,Supplied Stock,Remaining Stock"
        )
        .unwrap();
        for row in &report.stock_status {
            writeln!(
                output,
                "{},{},{},{},{}",
                row.warehouse, row.product, row.initial, row.supplied, row.remaining
            )
            .unwrap();
        }

        output
    }

    /// Writes the stock status relation to a CSV file.
    pub fn to_file(report: &SourcingReport, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(report))
    }

    /// Writes the stock status relation as CSV to a writer.
    pub fn write<W: Write>(report: &SourcingReport, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(report).as_bytes())
    }
}

/// CSV exporter for aggregated route allocations.
///
/// Products on a route are joined with `"; "` so each route stays on
/// one line.
pub struct AllocationCsv;

impl AllocationCsv {
    /// Renders aggregated allocations to a CSV string.
    pub fn to_string(allocations: &[RouteAllocation]) -> String {
        let mut output = String::new();

        writeln!(output, "Warehouse,Order,Products,Total Quantity").unwrap();
        for route in allocations {
            let products = route
                .items()
                .iter()
                .map(|(product, quantity)| format!("{} ({})", product, quantity))
                .collect::<Vec<_>>()
                .join("; ");
            writeln!(
                output,
                "{},{},{},{}",
                route.warehouse(),
                route.order(),
                products,
                route.total()
            )
            .unwrap();
        }

        output
    }

    /// Writes aggregated allocations to a CSV file.
    pub fn to_file(allocations: &[RouteAllocation], path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(allocations))
    }

    /// Writes aggregated allocations as CSV to a writer.
    pub fn write<W: Write>(allocations: &[RouteAllocation], mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(allocations).as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate_allocations;
    use stockwise_core::report::{FulfillmentRecord, StockStatusRecord};

    fn sample_report() -> SourcingReport {
        SourcingReport {
            fulfillment: vec![
                FulfillmentRecord {
                    warehouse: "W1".to_string(),
                    product: "P1".to_string(),
                    order: "O1".to_string(),
                    quantity: 3,
                },
                FulfillmentRecord {
                    warehouse: "W1".to_string(),
                    product: "P2".to_string(),
                    order: "O1".to_string(),
                    quantity: 0,
                },
            ],
            stock_status: vec![StockStatusRecord {
                warehouse: "W1".to_string(),
                product: "P1".to_string(),
                initial: 5,
                supplied: 3,
                remaining: 2,
            }],
        }
    }

    #[test]
    fn test_fulfillment_rows_in_relation_order() {
        let csv = FulfillmentCsv::to_string(&sample_report());
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Warehouse,Product,Order,Supply Quantity",
                "W1,P1,O1,3",
                "W1,P2,O1,0",
            ]
        );
    }

    #[test]
    fn test_stock_status_arithmetic_columns() {
        let csv = StockStatusCsv::to_string(&sample_report());
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Warehouse,Product,Initial Stock,Supplied Stock,Remaining Stock",
                "W1,P1,5,3,2",
            ]
        );
    }

    #[test]
    fn test_allocation_rows_join_products() {
        let routes = aggregate_allocations(&sample_report());
        let csv = AllocationCsv::to_string(&routes);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Warehouse,Order,Products,Total Quantity",
                "W1,O1,P1 (3); P2 (0),3",
            ]
        );
    }

    #[test]
    fn test_empty_report_renders_headers_only() {
        let report = SourcingReport::empty();
        assert_eq!(
            FulfillmentCsv::to_string(&report),
            "Warehouse,Product,Order,Supply Quantity\n"
        );
        assert_eq!(
            StockStatusCsv::to_string(&report),
            "Warehouse,Product,Initial Stock,Supplied Stock,Remaining Stock\n"
        );
    }

    #[test]
    fn test_write_matches_to_string() {
        let report = sample_report();
        let mut buffer = Vec::new();
        FulfillmentCsv::write(&report, &mut buffer).unwrap();
        assert_eq!(buffer, FulfillmentCsv::to_string(&report).into_bytes());
    }
}
