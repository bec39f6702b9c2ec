//! Guest name lookup from the page's incoming query string.
//!
//! Invitation links carry the guest's display name in one of several
//! equivalent parameters (`?k=`, `?guest=`, `?to=`). The first listed name
//! that is present with a non-empty value wins.

use url::form_urlencoded;
use url::Url;

/// Parameter names checked, highest priority first
pub const DEFAULT_GUEST_PARAMS: [&str; 3] = ["k", "guest", "to"];

/// Resolve the guest name from `input` using `params` in priority order.
///
/// `input` may be a bare query (`k=Anna`), a query with its leading `?`, or
/// a full URL. Values are percent/plus decoded. Returns `None` when no listed
/// parameter carries a value.
pub fn resolve_guest_name<S: AsRef<str>>(input: &str, params: &[S]) -> Option<String> {
    let pairs: Vec<(String, String)> = match Url::parse(input) {
        Ok(url) => url.query_pairs().into_owned().collect(),
        Err(_) => {
            let query = input.split_once('?').map_or(input, |(_, q)| q);
            let query = query.split_once('#').map_or(query, |(q, _)| q);
            form_urlencoded::parse(query.as_bytes()).into_owned().collect()
        }
    };

    params.iter().find_map(|param| {
        pairs
            .iter()
            .find(|(key, _)| key == param.as_ref())
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    })
}

/// [`resolve_guest_name`] with the standard parameter names
pub fn guest_name_from_query(input: &str) -> Option<String> {
    resolve_guest_name(input, &DEFAULT_GUEST_PARAMS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_param() {
        assert_eq!(guest_name_from_query("?k=Anna").as_deref(), Some("Anna"));
    }

    #[test]
    fn priority_order_beats_position() {
        assert_eq!(guest_name_from_query("?guest=Bao&to=Chi").as_deref(), Some("Bao"));
        assert_eq!(guest_name_from_query("?to=Chi&k=Anna").as_deref(), Some("Anna"));
    }

    #[test]
    fn no_relevant_params() {
        assert_eq!(guest_name_from_query(""), None);
        assert_eq!(guest_name_from_query("?"), None);
        assert_eq!(guest_name_from_query("?utm_source=zalo"), None);
    }

    #[test]
    fn empty_value_falls_through() {
        assert_eq!(guest_name_from_query("?k=&to=Chi").as_deref(), Some("Chi"));
        assert_eq!(guest_name_from_query("?k=%20%20"), None);
    }

    #[test]
    fn decodes_percent_and_plus() {
        assert_eq!(
            guest_name_from_query("?guest=Nguy%E1%BB%85n+V%C4%83n+A").as_deref(),
            Some("Nguyễn Văn A")
        );
    }

    #[test]
    fn accepts_full_url() {
        assert_eq!(
            guest_name_from_query("https://example.com/thiep/?to=Chi#top").as_deref(),
            Some("Chi")
        );
    }

    #[test]
    fn bare_query_without_question_mark() {
        assert_eq!(guest_name_from_query("to=Chi").as_deref(), Some("Chi"));
    }

    #[test]
    fn custom_param_names() {
        assert_eq!(resolve_guest_name("?name=Dung&k=Anna", &["name"]).as_deref(), Some("Dung"));
        assert_eq!(resolve_guest_name("?k=Anna", &[] as &[&str]), None);
    }
}
