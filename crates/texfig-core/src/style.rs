// File: crates/texfig-core/src/style.rs
// Summary: Explicit per-figure style (fonts, TeX preamble, line cycle, locale, size) replacing global rc state.

use crate::axes::TickParams;
use crate::config::FigureOptions;
use crate::cycle::PropCycle;
use crate::error::Result;
use crate::locale::NumberLocale;
use crate::size::FigureSize;
use crate::types::{DEFAULT_FIGSIZE, DEFAULT_FONT_SIZE, SMALL_FONT_FACTOR};

#[derive(Clone, Debug, PartialEq)]
pub struct FigureStyle {
    pub serif: bool,
    /// Base font size in points; axis labels use it unscaled.
    pub font_size: f64,
    /// PDF info entries, written into the hyperref setup in this order.
    pub metadata: Vec<(String, String)>,
    pub prop_cycle: PropCycle,
    pub locale: NumberLocale,
    /// `None` keeps the default figure size.
    pub size: Option<FigureSize>,
    pub tick_params: TickParams,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            serif: true,
            font_size: DEFAULT_FONT_SIZE,
            metadata: Vec::new(),
            prop_cycle: PropCycle::publication(),
            locale: NumberLocale::English,
            size: None,
            tick_params: TickParams::default(),
        }
    }
}

impl FigureStyle {
    /// Style for a figure built from `opts`.
    ///
    /// Fails only when a size is requested with an unsupported unit.
    pub fn setup(opts: &FigureOptions) -> Result<Self> {
        let size = FigureSize::compute_str(opts.width, opts.height, opts.unit.as_deref())?;
        let prop_cycle = if opts.set_lines || opts.colors.is_some() || opts.linestyles.is_some() {
            PropCycle::zipped(opts.colors.clone(), opts.linestyles.clone())
        } else {
            PropCycle::backend_default()
        };
        Ok(Self {
            serif: opts.serif,
            font_size: opts.font_size,
            metadata: opts.metadata.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            prop_cycle,
            locale: NumberLocale::from_de_flag(opts.de),
            size,
            tick_params: TickParams::default(),
        })
    }

    pub fn with_size(mut self, size: FigureSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Requested size, or the default figure size.
    pub fn figure_size(&self) -> FigureSize {
        self.size.unwrap_or(FigureSize::from_inches(DEFAULT_FIGSIZE.0, DEFAULT_FIGSIZE.1))
    }

    pub fn font_family(&self) -> &'static str {
        if self.serif { "serif" } else { "sans-serif" }
    }

    pub fn label_font_size(&self) -> f64 { self.font_size }

    pub fn legend_font_size(&self) -> f64 { SMALL_FONT_FACTOR * self.font_size }

    pub fn tick_font_size(&self) -> f64 { SMALL_FONT_FACTOR * self.font_size }

    /// LaTeX preamble used when the figure is typeset by pdflatex.
    pub fn tex_preamble(&self) -> String {
        let mut preamble = String::from("\\usepackage[utf8x]{inputenc}\n\\usepackage[T1]{fontenc}");
        if !self.metadata.is_empty() {
            let pdfinfo = self
                .metadata
                .iter()
                .map(|(k, v)| metadata_entry(k, v))
                .collect::<Vec<_>>()
                .join(",");
            preamble.push_str(&format!("\n\\usepackage{{hyperref}}\\hypersetup{{{pdfinfo}}}"));
        }
        if !self.serif {
            preamble.push_str("\n\\usepackage{cmbright}");
        }
        preamble
    }

    /// Backend parameters this style sets, in write order.
    pub fn rc_params(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::with_capacity(9);
        if let Some(s) = self.size {
            out.push(("figure.figsize", format!("[{}, {}]", s.width, s.height)));
        }
        out.push(("pgf.texsystem", "pdflatex".to_string()));
        out.push(("pgf.preamble", self.tex_preamble()));
        out.push(("font.family", self.font_family().to_string()));
        out.push(("axes.labelsize", self.label_font_size().to_string()));
        out.push(("font.size", self.font_size.to_string()));
        out.push(("legend.fontsize", self.legend_font_size().to_string()));
        out.push(("xtick.labelsize", self.tick_font_size().to_string()));
        out.push(("ytick.labelsize", self.tick_font_size().to_string()));
        out
    }

    /// Font families tried in order when rendering text.
    pub fn font_families(&self) -> &'static [&'static str] {
        if self.serif {
            &["CMU Serif", "Latin Modern Roman", "Computer Modern", "DejaVu Serif", "Times New Roman", "serif"]
        } else {
            &["CMU Bright", "CMU Sans Serif", "Latin Modern Sans", "DejaVu Sans", "Arial", "sans-serif"]
        }
    }
}

/// `pdf<key>={<value>}` with the key lowercased and `_` escaped in the value.
fn metadata_entry(key: &str, value: &str) -> String {
    format!("pdf{}={{{}}}", key.to_lowercase(), value.replace('_', "\\_"))
}
