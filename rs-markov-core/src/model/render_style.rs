/// How a finished walk is written out.
///
/// # Layout
/// `p0 <connector> p1 <connector> ... pn [truncation_marker] <line_end>`
///
/// - `connector` is written between consecutive payloads
/// - `truncation_marker` is written once, only when the walk stopped on its length cap
/// - `line_end` is written once, after everything else
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderStyle {
	pub connector: String,
	pub truncation_marker: String,
	pub line_end: String,
}

impl Default for RenderStyle {
	/// Space-separated payloads, no truncation marker, newline at the end.
	fn default() -> Self {
		Self {
			connector: " ".to_owned(),
			truncation_marker: String::new(),
			line_end: "\n".to_owned(),
		}
	}
}

impl RenderStyle {
	pub fn with_connector(mut self, connector: &str) -> Self {
		self.connector = connector.to_owned();
		self
	}

	pub fn with_truncation_marker(mut self, marker: &str) -> Self {
		self.truncation_marker = marker.to_owned();
		self
	}

	pub fn with_line_end(mut self, line_end: &str) -> Self {
		self.line_end = line_end.to_owned();
		self
	}
}
