// File: crates/stats-core/src/chart.rs
// Summary: Chart state machine: initial render binds scales, interactions redraw them.

use crate::error::StatsError;
use crate::extent::{count_range, time_domain, CountRange, TimeDomain};
use crate::layout::ChartLayout;
use crate::palette::Palette;
use crate::render::{build_commands, DrawSink};
use crate::series::StatSeries;
use crate::view::TimeView;

/// Scale state bound by the initial render.
#[derive(Clone, Copy, Debug)]
struct Rendered {
    domain: TimeDomain,
    range: CountRange,
    view: TimeView,
}

/// One chart over a selected group of series.
///
/// Two states: unrendered (no scales) and rendered. [`StatsChart::render`]
/// computes the shared domain/range once per data refresh and performs the
/// first draw; [`StatsChart::pan`] and [`StatsChart::zoom`] mutate only the
/// visible time window and redraw against the same stored series. Zooming
/// never resamples: the point data is immutable once set.
pub struct StatsChart {
    layout: ChartLayout,
    palette: Palette,
    series: Vec<StatSeries>,
    rendered: Option<Rendered>,
}

impl StatsChart {
    pub fn new(layout: ChartLayout, palette: Palette) -> Self {
        Self {
            layout,
            palette,
            series: Vec::new(),
            rendered: None,
        }
    }

    /// Replace the series wholesale (periodic refresh rebuilds, it never
    /// patches). Drops back to the unrendered state.
    pub fn set_series(&mut self, series: Vec<StatSeries>) {
        self.series = series;
        self.rendered = None;
    }

    pub fn series(&self) -> &[StatSeries] {
        &self.series
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    /// Visible time window, once rendered.
    pub fn view(&self) -> Option<TimeView> {
        self.rendered.map(|r| r.view)
    }

    /// Full data domain, once rendered.
    pub fn domain(&self) -> Option<TimeDomain> {
        self.rendered.map(|r| r.domain)
    }

    /// Unrendered -> rendered: derive domain/range from the current series,
    /// open the view on the full domain, and draw.
    ///
    /// An all-empty selection yields [`StatsError::NothingToRender`]; no
    /// commands reach the sink and the chart stays unrendered.
    pub fn render(&mut self, sink: &mut dyn DrawSink) -> Result<(), StatsError> {
        let domain = time_domain(&self.series).ok_or(StatsError::NothingToRender)?;
        let range = count_range(&self.series).ok_or(StatsError::NothingToRender)?;
        self.rendered = Some(Rendered {
            domain,
            range,
            view: TimeView::from_domain(domain),
        });
        self.redraw(sink)
    }

    /// Rendered self-loop: re-emit commands for the current view. The count
    /// scale is refitted from the unchanged range each time.
    pub fn redraw(&mut self, sink: &mut dyn DrawSink) -> Result<(), StatsError> {
        let rendered = self.rendered.as_ref().ok_or(StatsError::NotRendered)?;
        let commands = build_commands(
            &self.layout,
            &rendered.view,
            &rendered.range,
            &self.series,
            &self.palette,
        )?;
        sink.submit(&commands);
        Ok(())
    }

    /// Pan the time window by a pixel delta and redraw.
    pub fn pan(&mut self, dx_px: f64, sink: &mut dyn DrawSink) -> Result<(), StatsError> {
        let plot = self.layout.plot_rect();
        let rendered = self.rendered.as_mut().ok_or(StatsError::NotRendered)?;
        rendered.view.pan_by_pixels(dx_px, plot.width() as f64);
        self.redraw(sink)
    }

    /// Zoom the time window around the cursor position and redraw.
    pub fn zoom(
        &mut self,
        scroll: f64,
        cursor_x_px: f64,
        sink: &mut dyn DrawSink,
    ) -> Result<(), StatsError> {
        let plot = self.layout.plot_rect();
        let rendered = self.rendered.as_mut().ok_or(StatsError::NotRendered)?;
        rendered
            .view
            .zoom_at_pixel(scroll, cursor_x_px, plot.left as f64, plot.width() as f64);
        self.redraw(sink)
    }
}
