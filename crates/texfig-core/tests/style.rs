// File: crates/texfig-core/tests/style.rs
// Purpose: Figure style built from options: preamble, backend parameters, cycle and locale.

use texfig_core::cycle::{default_colors, LineStyle, Rgb};
use texfig_core::{FigureOptions, FigureStyle, NumberLocale};

#[test]
fn preamble_serif_without_metadata() {
    let style = FigureStyle::setup(&FigureOptions::default()).unwrap();
    assert_eq!(style.tex_preamble(), "\\usepackage[utf8x]{inputenc}\n\\usepackage[T1]{fontenc}");
}

#[test]
fn preamble_with_metadata_and_sans() {
    let mut opts = FigureOptions::default();
    opts.serif = false;
    opts.metadata.insert("Author", "A_B");
    opts.metadata.insert("Title", "Plot");
    let style = FigureStyle::setup(&opts).unwrap();
    assert_eq!(
        style.tex_preamble(),
        "\\usepackage[utf8x]{inputenc}\n\\usepackage[T1]{fontenc}\n\
         \\usepackage{hyperref}\\hypersetup{pdfauthor={A\\_B},pdftitle={Plot}}\n\
         \\usepackage{cmbright}"
    );
}

#[test]
fn rc_params_order_and_sizes() {
    let style = FigureStyle::setup(&FigureOptions::sized(4.0, 3.0, "in")).unwrap();
    let keys: Vec<_> = style.rc_params().iter().map(|(k, _)| *k).collect();
    assert_eq!(
        keys,
        [
            "figure.figsize",
            "pgf.texsystem",
            "pgf.preamble",
            "font.family",
            "axes.labelsize",
            "font.size",
            "legend.fontsize",
            "xtick.labelsize",
            "ytick.labelsize"
        ]
    );
    let params = style.rc_params();
    assert_eq!(params[0].1, "[4, 3]");
    assert_eq!(params[3].1, "serif");
    assert_eq!(style.tick_font_size(), 7.0);
}

#[test]
fn no_size_leaves_figsize_untouched() {
    let style = FigureStyle::setup(&FigureOptions::default()).unwrap();
    assert!(style.rc_params().iter().all(|(k, _)| *k != "figure.figsize"));
    assert_eq!(style.figure_size().width, 6.4);
}

#[test]
fn cycle_zips_to_shorter_list() {
    let mut opts = FigureOptions::default();
    opts.colors = Some(vec![Rgb::BLACK, Rgb::new(255, 0, 0)]);
    let style = FigureStyle::setup(&opts).unwrap();
    assert_eq!(style.prop_cycle.len(), 2);
    assert_eq!(style.prop_cycle.nth(1), (Rgb::new(255, 0, 0), LineStyle::Dashed));
    assert_eq!(style.prop_cycle.nth(2).0, Rgb::BLACK);

    let style = FigureStyle::setup(&FigureOptions::default()).unwrap();
    assert_eq!(style.prop_cycle.colors().collect::<Vec<_>>(), default_colors());
}

#[test]
fn lines_off_uses_backend_cycle() {
    let mut opts = FigureOptions::default();
    opts.set_lines = false;
    let style = FigureStyle::setup(&opts).unwrap();
    assert_eq!(style.prop_cycle.len(), 10);
    assert!(style.prop_cycle.linestyles().all(|l| *l == LineStyle::Solid));
}

#[test]
fn german_locale_from_flag() {
    let mut opts = FigureOptions::default();
    opts.de = true;
    let style = FigureStyle::setup(&opts).unwrap();
    assert_eq!(style.locale, NumberLocale::German);
}

#[test]
fn styles_do_not_leak_between_figures() {
    let a = FigureStyle::setup(&FigureOptions { serif: false, font_size: 12.0, ..FigureOptions::default() }).unwrap();
    let b = FigureStyle::setup(&FigureOptions::default()).unwrap();
    assert!(!a.serif);
    assert!(b.serif);
    assert_eq!(b.font_size, 10.0);
}
