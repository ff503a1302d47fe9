use crate::chart::{GroupedHistogram, DEFAULT_BINS};
use crate::color::ColorMap;
use crate::data::model::Table;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded table (None until the user loads a file).
    pub dataset: Option<Table>,

    /// Column whose values are binned.
    pub value_column: Option<String>,

    /// Column whose labels partition the rows.
    pub group_column: Option<String>,

    /// Number of histogram bins.
    pub bins: usize,

    /// The chart built from the current selection (cached).
    pub chart: Option<GroupedHistogram>,

    /// Active colour map over the group labels.
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            value_column: None,
            group_column: None,
            bins: DEFAULT_BINS,
            chart: None,
            color_map: None,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded table and pick default columns.
    pub fn set_dataset(&mut self, table: Table) {
        self.value_column = table.numeric_column_names().first().cloned();
        // Default group column: first categorical column that is not the
        // value column, so the initial chart is not grouped by itself.
        self.group_column = table
            .categorical_column_names()
            .into_iter()
            .find(|c| Some(c) != self.value_column.as_ref());

        self.dataset = Some(table);
        self.status_message = None;
        self.loading = false;
        self.rebuild_chart();
    }

    /// Rebuild the chart and colour map from the current selection.
    /// Build failures land in the status message.
    pub fn rebuild_chart(&mut self) {
        self.chart = None;
        self.color_map = None;

        let (Some(table), Some(value_col), Some(group_col)) = (
            self.dataset.as_ref(),
            self.value_column.as_deref(),
            self.group_column.as_deref(),
        ) else {
            return;
        };

        match GroupedHistogram::build(table, value_col, group_col, self.bins) {
            Ok(chart) => {
                let labels: Vec<String> =
                    chart.series.iter().map(|s| s.label.clone()).collect();
                self.color_map = Some(ColorMap::new(group_col, &labels));
                self.chart = Some(chart);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to build chart: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Set the value column and rebuild.
    pub fn set_value_column(&mut self, col: String) {
        self.value_column = Some(col);
        self.rebuild_chart();
    }

    /// Set the group column and rebuild.
    pub fn set_group_column(&mut self, col: String) {
        self.group_column = Some(col);
        self.rebuild_chart();
    }

    /// Set the bin count and rebuild.
    pub fn set_bins(&mut self, bins: usize) {
        if bins != self.bins {
            self.bins = bins;
            self.rebuild_chart();
        }
    }
}
