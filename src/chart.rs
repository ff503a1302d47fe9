use serde::Serialize;

use crate::data::model::Table;
use crate::error::{Error, Result};
use crate::stats;

// ---------------------------------------------------------------------------
// Grouped histogram model
// ---------------------------------------------------------------------------

/// Bin count used when the caller does not choose one.
pub const DEFAULT_BINS: usize = 30;

/// Binned frequency distribution for one group label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramSeries {
    pub label: String,
    /// One count per bin, aligned with the parent chart's `bin_edges`.
    pub counts: Vec<u64>,
    /// Number of finite values that went into `counts`.
    pub n_values: usize,
    /// Mean of those values; NaN when the group has no finite values.
    pub mean: f64,
}

/// One histogram per group label, binned over a single shared value range
/// so the distributions are comparable when overlaid.
///
/// This is a pure value type: identical inputs build deep-equal charts.
/// Colors and legend rendering are the presentation layer's concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedHistogram {
    pub value_column: String,
    pub group_column: String,
    /// `n_bins() + 1` ascending edges shared by every series.
    pub bin_edges: Vec<f64>,
    /// One series per distinct group label, in label sort order.
    pub series: Vec<HistogramSeries>,
}

impl GroupedHistogram {
    /// Partition `value_column` by the labels of `group_column` and bin
    /// each subset over the column's full finite range.
    ///
    /// Fails with [`Error::InvalidColumn`] when either column is absent or
    /// of the wrong semantic type, or when the value column holds no finite
    /// values at all. Non-finite values (Null cells, NaN) are skipped.
    pub fn build(
        table: &Table,
        value_column: &str,
        group_column: &str,
        bins: usize,
    ) -> Result<Self> {
        let values = table.numeric(value_column)?;
        let groups = table.categorical(group_column)?;
        let bins = bins.max(1);

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in &values.values {
            if v.is_finite() {
                min = min.min(v);
                max = max.max(v);
            }
        }
        if min > max {
            return Err(Error::invalid_column(
                value_column,
                "column holds no finite values",
            ));
        }
        // All values equal: widen the range so the single bin has width.
        if min == max {
            min -= 0.5;
            max += 0.5;
        }

        let width = (max - min) / bins as f64;
        let bin_edges: Vec<f64> = (0..=bins).map(|i| min + i as f64 * width).collect();

        let series = groups
            .distinct
            .iter()
            .map(|label| {
                let mut counts = vec![0u64; bins];
                let mut members = Vec::new();
                for (&v, row_label) in values.values.iter().zip(&groups.labels) {
                    if row_label != label || !v.is_finite() {
                        continue;
                    }
                    let idx = (((v - min) / width) as usize).min(bins - 1);
                    counts[idx] += 1;
                    members.push(v);
                }
                let n_values = members.len();
                let mean = stats::average(&members).unwrap_or(f64::NAN);
                HistogramSeries {
                    label: label.clone(),
                    counts,
                    n_values,
                    mean,
                }
            })
            .collect();

        Ok(GroupedHistogram {
            value_column: value_column.to_string(),
            group_column: group_column.to_string(),
            bin_edges,
            series,
        })
    }

    pub fn n_bins(&self) -> usize {
        self.bin_edges.len() - 1
    }

    pub fn bin_width(&self) -> f64 {
        self.bin_edges[1] - self.bin_edges[0]
    }

    /// Midpoint of bin `i`; used as the bar position when plotting.
    pub fn bin_center(&self, i: usize) -> f64 {
        (self.bin_edges[i] + self.bin_edges[i + 1]) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::table_from_csv_reader;

    fn continents() -> Table {
        let csv_text = "\
country,continent,lifeExp
Japan,Asia,82.6
China,Asia,73.0
India,Asia,64.7
Spain,Europe,80.9
Norway,Europe,80.2
";
        table_from_csv_reader(csv::Reader::from_reader(csv_text.as_bytes())).unwrap()
    }

    #[test]
    fn one_series_per_group_label() {
        let chart = GroupedHistogram::build(&continents(), "lifeExp", "continent", 10).unwrap();
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].label, "Asia");
        assert_eq!(chart.series[1].label, "Europe");
        assert_eq!(chart.series[0].n_values, 3);
        assert_eq!(chart.series[1].n_values, 2);
    }

    #[test]
    fn bin_edges_are_shared_across_series() {
        let chart = GroupedHistogram::build(&continents(), "lifeExp", "continent", 10).unwrap();
        assert_eq!(chart.bin_edges.len(), 11);
        assert_eq!(chart.n_bins(), 10);
        for s in &chart.series {
            assert_eq!(s.counts.len(), chart.n_bins());
        }
        // Edges span the full value range.
        assert_eq!(chart.bin_edges[0], 64.7);
        assert!((chart.bin_edges[10] - 82.6).abs() < 1e-9);
    }

    #[test]
    fn every_finite_value_lands_in_exactly_one_bin() {
        let chart = GroupedHistogram::build(&continents(), "lifeExp", "continent", 7).unwrap();
        let total: u64 = chart.series.iter().flat_map(|s| &s.counts).sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn per_group_means() {
        let chart = GroupedHistogram::build(&continents(), "lifeExp", "continent", 5).unwrap();
        let asia = &chart.series[0];
        assert!((asia.mean - (82.6 + 73.0 + 64.7) / 3.0).abs() < 1e-9);
        let europe = &chart.series[1];
        assert!((europe.mean - (80.9 + 80.2) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn missing_or_wrongly_typed_columns_fail() {
        let t = continents();
        assert!(matches!(
            GroupedHistogram::build(&t, "gdpPercap", "continent", 10),
            Err(Error::InvalidColumn { ref name, .. }) if name == "gdpPercap"
        ));
        // A continuous column cannot serve as the grouping column.
        assert!(matches!(
            GroupedHistogram::build(&t, "lifeExp", "lifeExp", 10),
            Err(Error::InvalidColumn { .. })
        ));
        // A textual column cannot serve as the value column.
        assert!(matches!(
            GroupedHistogram::build(&t, "country", "continent", 10),
            Err(Error::InvalidColumn { .. })
        ));
    }

    #[test]
    fn identical_inputs_build_deep_equal_charts() {
        let t = continents();
        let a = GroupedHistogram::build(&t, "lifeExp", "continent", DEFAULT_BINS).unwrap();
        let b = GroupedHistogram::build(&t, "lifeExp", "continent", DEFAULT_BINS).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn degenerate_range_still_produces_a_chart() {
        let csv_text = "g,v\na,5\nb,5\n";
        let t = table_from_csv_reader(csv::Reader::from_reader(csv_text.as_bytes())).unwrap();
        let chart = GroupedHistogram::build(&t, "v", "g", 4).unwrap();
        assert_eq!(chart.bin_edges[0], 4.5);
        assert_eq!(chart.bin_edges[4], 5.5);
        let total: u64 = chart.series.iter().flat_map(|s| &s.counts).sum();
        assert_eq!(total, 2);
    }
}
