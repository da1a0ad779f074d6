//! Determinate progress meter.

use std::fmt::{self, Write as _};
use std::sync::Arc;

use indicatif::{ProgressBar, ProgressState, ProgressStyle};

use super::target::FrameBuffer;
use crate::terminal::Terminal;
use crate::RenderError;

/// Columns kept free around the bar, percent, units and times.
const RESERVED: usize = 5;

/// Positions are kept in thousandths, since indicatif counts in integers.
const SCALE: f64 = 1000.0;

type UnitFormatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// A one-line progress bar: `||||||      42%[42/100][3s/4s]`.
///
/// Values only move forward and never past the maximum. The first update
/// starts the clock used for the elapsed and remaining times.
///
/// ```rust
/// use textui_render::{meter::Progress, MockTerminal};
///
/// let mut term = MockTerminal::new(40, 5);
/// let mut progress = Progress::new(200.0).unwrap().times(false);
/// progress.update(&mut term, 50.0).unwrap();
/// assert!(term.output().contains("25%[50/200]"));
/// ```
pub struct Progress {
    max: f64,
    current: f64,
    started: bool,
    precision: usize,
    bar_char: char,
    units: bool,
    times: bool,
    formatter: Option<UnitFormatter>,
    bar: ProgressBar,
    frames: FrameBuffer,
}

impl fmt::Debug for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Progress")
            .field("max", &self.max)
            .field("current", &self.current)
            .field("precision", &self.precision)
            .field("bar_char", &self.bar_char)
            .field("units", &self.units)
            .field("times", &self.times)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

impl Progress {
    pub fn new(max: f64) -> Result<Self, RenderError> {
        if !max.is_finite() || max <= 0.0 {
            return Err(RenderError::InvalidMaximum(max));
        }
        let frames = FrameBuffer::default();
        let bar = ProgressBar::with_draw_target(Some(scaled(max)), frames.draw_target());
        Ok(Self {
            max,
            current: 0.0,
            started: false,
            precision: 0,
            bar_char: '|',
            units: true,
            times: true,
            formatter: None,
            bar,
            frames,
        })
    }

    /// Number of decimals shown in the percentage.
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Fill character of the bar. It must be one column wide.
    pub fn bar_char(mut self, c: char) -> Self {
        self.bar_char = c;
        self
    }

    /// Show `[current/max]`.
    pub fn units(mut self, show: bool) -> Self {
        self.units = show;
        self
    }

    /// Show `[elapsed/remaining]`.
    pub fn times(mut self, show: bool) -> Self {
        self.times = show;
        self
    }

    /// Format both numbers of the units part, e.g. as byte sizes.
    pub fn unit_formatter(mut self, formatter: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Start the clock, if it is not running yet.
    pub fn start(&mut self) {
        if !self.started {
            self.bar.reset_elapsed();
            self.bar.reset_eta();
            self.started = true;
        }
    }

    /// Move to `value` and redraw.
    pub fn update(&mut self, term: &mut dyn Terminal, value: f64) -> Result<(), RenderError> {
        self.set_value(value)?;
        self.start();
        self.prepare(term)?;
        self.bar.set_position(scaled(self.current));
        self.frames.flush_to(term, true)
    }

    /// Fill the bar and move to the next line.
    pub fn end(&mut self, term: &mut dyn Terminal) -> Result<(), RenderError> {
        self.set_value(self.max)?;
        self.start();
        self.prepare(term)?;
        self.bar.set_position(scaled(self.max));
        self.bar.finish();
        self.frames.flush_to(term, true)?;
        term.write("\n")?;
        Ok(())
    }

    fn set_value(&mut self, value: f64) -> Result<(), RenderError> {
        if value < self.current || value > self.max || value.is_nan() {
            return Err(RenderError::ValueOutOfRange {
                value,
                min: self.current,
                max: self.max,
            });
        }
        self.current = value;
        Ok(())
    }

    /// Size the frame to the terminal and install the current style.
    fn prepare(&mut self, term: &mut dyn Terminal) -> Result<(), RenderError> {
        self.frames.set_width(term.columns()?.saturating_sub(RESERVED));
        self.bar.set_style(self.style()?);
        Ok(())
    }

    fn style(&self) -> Result<ProgressStyle, RenderError> {
        let mut template = String::from("{wide_bar}{ratio}");
        if self.units {
            template.push_str("[{units}]");
        }
        if self.times {
            template.push_str("[{elapsed}/{eta}]");
        }

        let precision = self.precision;
        let formatter = self.formatter.clone();
        let style = ProgressStyle::default_bar()
            .template(&template)?
            .progress_chars(&format!("{} ", self.bar_char))
            .with_key("ratio", move |state: &ProgressState, w: &mut dyn fmt::Write| {
                let _ = write!(w, "{:.*}%", precision, ratio(state) * 100.0);
            })
            .with_key("units", move |state: &ProgressState, w: &mut dyn fmt::Write| {
                let current = unscaled(state.pos());
                let max = unscaled(state.len().unwrap_or(0));
                let _ = match &formatter {
                    Some(f) => write!(w, "{}/{}", f(current), f(max)),
                    None => write!(w, "{}/{}", current, max),
                };
            });
        Ok(style)
    }
}

fn scaled(value: f64) -> u64 {
    (value * SCALE).round() as u64
}

fn unscaled(value: u64) -> f64 {
    value as f64 / SCALE
}

fn ratio(state: &ProgressState) -> f64 {
    match state.len() {
        Some(len) if len > 0 => state.pos() as f64 / len as f64,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::MockTerminal;
    use crate::util::display_width;

    fn last_line(term: &MockTerminal) -> &str {
        let out = term.output().trim_end_matches(['\r', '\n']);
        out.rsplit("\x1b[2K\r").next().unwrap_or(out)
    }

    #[test]
    fn maximum_must_be_positive() {
        assert!(matches!(Progress::new(0.0), Err(RenderError::InvalidMaximum(_))));
        assert!(matches!(Progress::new(-3.0), Err(RenderError::InvalidMaximum(_))));
        assert!(Progress::new(f64::NAN).is_err());
    }

    #[test]
    fn values_only_move_forward() {
        let mut term = MockTerminal::new(60, 5);
        let mut progress = Progress::new(10.0).unwrap();
        progress.update(&mut term, 5.0).unwrap();
        assert!(matches!(
            progress.update(&mut term, 4.0),
            Err(RenderError::ValueOutOfRange { .. })
        ));
        assert!(progress.update(&mut term, 11.0).is_err());
        assert_eq!(progress.current(), 5.0);
    }

    #[test]
    fn layout_without_times() {
        let mut term = MockTerminal::new(30, 5);
        let mut progress = Progress::new(10.0).unwrap().times(false);
        progress.update(&mut term, 5.0).unwrap();
        // 30 - "50%"(3) - "[5/10]"(6) - 5 = 16 columns of bar, half filled
        assert_eq!(term.output(), "\x1b[2K\r||||||||        50%[5/10]\r");
    }

    #[test]
    fn line_with_times_leaves_reserved_columns() {
        let mut term = MockTerminal::new(40, 5);
        let mut progress = Progress::new(100.0).unwrap().units(false).bar_char('#');
        progress.update(&mut term, 25.0).unwrap();
        let line = last_line(&term);
        assert!(line.starts_with("####"), "{}", line);
        assert!(line.contains("25%["), "{}", line);
        assert!(line.ends_with(']'), "{}", line);
        assert_eq!(display_width(line), 35);
    }

    #[test]
    fn precision_and_formatter() {
        let mut term = MockTerminal::new(50, 5);
        let mut progress = Progress::new(3.0)
            .unwrap()
            .precision(2)
            .times(false)
            .unit_formatter(|v| format!("{}kb", v));
        progress.update(&mut term, 1.0).unwrap();
        assert!(last_line(&term).ends_with("33.33%[1kb/3kb]"));
    }

    #[test]
    fn fractional_values_keep_their_units() {
        let mut term = MockTerminal::new(40, 5);
        let mut progress = Progress::new(2.5).unwrap().times(false);
        progress.update(&mut term, 0.5).unwrap();
        assert!(last_line(&term).ends_with("20%[0.5/2.5]"));
    }

    #[test]
    fn end_fills_and_breaks_line() {
        let mut term = MockTerminal::new(30, 5);
        let mut progress = Progress::new(4.0).unwrap().times(false);
        progress.end(&mut term).unwrap();
        assert!(term.output().contains("||||||||||||||||100%[4/4]"));
        assert!(term.output().ends_with("\r\n"));
        assert_eq!(progress.current(), 4.0);
    }

    #[test]
    fn narrow_terminal_keeps_the_numbers() {
        let mut term = MockTerminal::new(8, 5);
        let mut progress = Progress::new(10.0).unwrap().units(false).times(false);
        progress.update(&mut term, 1.0).unwrap();
        assert_eq!(last_line(&term), "10%");
    }
}
