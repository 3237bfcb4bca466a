//! `YearsList`: the decade grid of a year picker.

use std::fmt;
use std::fmt::Write as _;
use std::rc::Rc;

use chrono::{Datelike, Local, NaiveDate};

use super::element::Element;
use crate::css::inline::InlineStyle;
use crate::styles_api::{ComponentKind, StylesOverrides, StylesResolver};
use crate::theme::{get_font_size, get_size, variant_color_resolver, Size, SizeToken, Theme, Variant};

/// Per-year control overrides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YearControlProps {
    pub selected: bool,
    pub disabled: bool,
    pub in_range: bool,
}

pub type YearControlPropsFn = Rc<dyn Fn(i32) -> YearControlProps>;

#[derive(Clone)]
pub struct YearsListProps {
    /// Any date inside the decade to display.
    pub decade: NaiveDate,
    /// chrono format string for the year labels.
    pub format: String,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub size: SizeToken,
    pub with_cell_spacing: bool,
    /// Date used as "today"; the local date when `None`.
    pub today: Option<NaiveDate>,
    pub get_year_control_props: Option<YearControlPropsFn>,
    /// Extra static class component name (`YearPicker`, `YearPickerInput`, ...).
    pub static_selector: Option<&'static str>,
    pub overrides: StylesOverrides,
}

impl fmt::Debug for YearsListProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YearsListProps")
            .field("decade", &self.decade)
            .field("format", &self.format)
            .field("min_date", &self.min_date)
            .field("max_date", &self.max_date)
            .field("size", &self.size)
            .field("with_cell_spacing", &self.with_cell_spacing)
            .field("today", &self.today)
            .field("static_selector", &self.static_selector)
            .finish_non_exhaustive()
    }
}

impl YearsListProps {
    pub fn new(decade: NaiveDate) -> Self {
        Self {
            decade,
            format: "%Y".to_owned(),
            min_date: None,
            max_date: None,
            size: SizeToken::Sm,
            with_cell_spacing: true,
            today: None,
            get_year_control_props: None,
            static_selector: None,
            overrides: StylesOverrides::default(),
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_min_date(mut self, date: NaiveDate) -> Self {
        self.min_date = Some(date);
        self
    }

    pub fn with_max_date(mut self, date: NaiveDate) -> Self {
        self.max_date = Some(date);
        self
    }

    pub fn with_size(mut self, size: SizeToken) -> Self {
        self.size = size;
        self
    }

    pub fn with_cell_spacing(mut self, spacing: bool) -> Self {
        self.with_cell_spacing = spacing;
        self
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn with_year_control_props(mut self, f: impl Fn(i32) -> YearControlProps + 'static) -> Self {
        self.get_year_control_props = Some(Rc::new(f));
        self
    }

    pub fn with_static_selector(mut self, name: &'static str) -> Self {
        self.static_selector = Some(name);
        self
    }

    pub fn with_overrides(mut self, overrides: StylesOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    fn control_props(&self, year: i32) -> YearControlProps {
        self.get_year_control_props
            .as_ref()
            .map(|f| f(year))
            .unwrap_or_default()
    }

    fn current_year(&self) -> i32 {
        self.today.unwrap_or_else(|| Local::now().date_naive()).year()
    }
}

// ---------------------------------------------------------------------------
// Decade data
// ---------------------------------------------------------------------------

/// Years of the decade containing `decade`, in rows of 3, 3, 3 and 1.
pub fn get_years_data(decade: NaiveDate) -> Vec<Vec<i32>> {
    let start = decade.year() - decade.year().rem_euclid(10);
    let years: Vec<i32> = (start..start + 10).collect();
    years.chunks(3).map(<[i32]>::to_vec).collect()
}

/// Whether `year` falls outside the `min_date`/`max_date` years.
pub fn is_year_disabled(year: i32, min_date: Option<NaiveDate>, max_date: Option<NaiveDate>) -> bool {
    min_date.is_some_and(|min| year < min.year()) || max_date.is_some_and(|max| year > max.year())
}

/// The single year reachable with Tab: the selected year, else the current
/// year, else the first enabled year. `None` when every year is disabled.
pub fn get_year_in_tab_order(props: &YearsListProps, years: &[Vec<i32>]) -> Option<i32> {
    let enabled: Vec<i32> = years
        .iter()
        .flatten()
        .copied()
        .filter(|&year| {
            !is_year_disabled(year, props.min_date, props.max_date) && !props.control_props(year).disabled
        })
        .collect();

    let current = props.current_year();
    enabled
        .iter()
        .copied()
        .find(|&year| props.control_props(year).selected)
        .or_else(|| enabled.iter().copied().find(|&year| year == current))
        .or_else(|| enabled.first().copied())
}

/// Format a year label with a chrono format string. Invalid format strings
/// fall back to the bare year.
pub fn format_year(year: i32, format: &str) -> String {
    let Some(date) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return year.to_string();
    };
    let mut out = String::new();
    match write!(out, "{}", date.format(format)) {
        Ok(()) => out,
        Err(_) => year.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// CSS variables of the `yearsList` part.
pub fn years_list_vars(props: &YearsListProps, theme: &Theme) -> InlineStyle {
    let primary = Some(theme.primary_color.as_str());
    let selected = variant_color_resolver(primary, theme, Variant::Filled);
    let range = variant_color_resolver(primary, theme, Variant::Light);
    let size = Size::Token(props.size);

    InlineStyle::from_pairs([
        ("--yl-control-size", get_size(&size, "yl-control-size")),
        ("--yl-fz", get_font_size(&size)),
        ("--yl-control-selected-bg", selected.background),
        ("--yl-control-selected-color", selected.color),
        ("--yl-control-selected-bg-hover", selected.hover),
        ("--yl-control-range-bg", range.hover),
        ("--yl-control-range-bg-hover", range.background),
    ])
}

pub fn years_list(props: &YearsListProps, theme: &Theme) -> Element {
    let mut resolver =
        StylesResolver::new(ComponentKind::YearsList, theme).with_vars(years_list_vars(props, theme));
    if let Some(name) = props.static_selector {
        resolver = resolver.with_name(name);
    }
    let o = &props.overrides;

    let years = get_years_data(props.decade);
    let in_tab_order = get_year_in_tab_order(props, &years);

    let rows = years.iter().map(|row| {
        let cells = row.iter().map(|&year| {
            let control = props.control_props(year);
            let disabled = control.disabled || is_year_disabled(year, props.min_date, props.max_date);
            let button = Element::new("button")
                .styles(resolver.get_styles("yearsListControl", o))
                .flag("data-selected", control.selected)
                .flag("data-in-range", control.in_range)
                .flag("disabled", disabled)
                .attr("tabindex", if Some(year) == in_tab_order { "0" } else { "-1" })
                .child(format_year(year, &props.format));
            Element::new("td")
                .styles(resolver.get_styles("yearsListCell", o))
                .flag("data-with-spacing", props.with_cell_spacing)
                .child(button)
        });
        Element::new("tr")
            .styles(resolver.get_styles("yearsListRow", o))
            .children(cells)
    });

    Element::new("table")
        .styles(resolver.get_styles("yearsList", o))
        .child(Element::new("tbody").children(rows))
}
