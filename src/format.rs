//! Date and label formatting shared by every widget.

/// Renders a signed year: negative is BCE, zero and above is CE.
pub fn format_year(year: i64) -> String {
	if year < 0 {
		format!("{} BCE", year.unsigned_abs())
	} else {
		format!("{} CE", year)
	}
}

/// Approximate year for a century of origin, e.g. `-5` is "500 BCE".
pub fn format_century_origin(century: i64) -> String {
	format_year(century.saturating_mul(100))
}

pub fn format_time_span(earliest: i64, latest: i64) -> String {
	format!("{} to {}", format_year(earliest), format_year(latest))
}

/// First `/` segment of a compound tradition such as `Norse/Germanic`.
pub fn primary_tradition(tradition: &str) -> &str {
	tradition.split('/').next().unwrap_or(tradition)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn years_render_with_era() {
		assert_eq!(format_year(-500), "500 BCE");
		assert_eq!(format_year(500), "500 CE");
		assert_eq!(format_year(0), "0 CE");
		assert_eq!(format_year(-200), "200 BCE");
	}

	#[test]
	fn century_origin_is_scaled_to_years() {
		assert_eq!(format_century_origin(-5), "500 BCE");
		assert_eq!(format_century_origin(12), "1200 CE");
	}

	#[test]
	fn time_span_joins_both_ends() {
		assert_eq!(format_time_span(-3000, 1900), "3000 BCE to 1900 CE");
	}

	#[test]
	fn primary_tradition_takes_first_segment() {
		assert_eq!(primary_tradition("Norse/Germanic"), "Norse");
		assert_eq!(primary_tradition("Norse/Slavic"), "Norse");
		assert_eq!(primary_tradition("Hermetic"), "Hermetic");
		assert_eq!(primary_tradition(""), "");
	}
}
