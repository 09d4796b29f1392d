use crossword_core::{ClueNumber, parse_clue_number};
use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlDocument, HtmlElement};

/// All elements under `root` matching `selector`, in document order.
pub(crate) fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let nodes = match root.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(err) => {
            log::error!("bad selector {:?}: {:?}", selector, err);
            return Vec::new();
        }
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn query_one<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<T>().ok())
}

pub(crate) fn element_by_id<T: JsCast>(id: &str) -> Option<T> {
    document()
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
}

/// Text of an embedded JSON block, looked up by element id.
pub(crate) fn data_block_text(id: &str) -> Option<String> {
    document().get_element_by_id(id)?.text_content()
}

pub(crate) fn clue_number_attr(element: &Element, attr: &str) -> Option<ClueNumber> {
    element
        .get_attribute(attr)
        .as_deref()
        .and_then(parse_clue_number)
}

pub(crate) fn set_displayed(id: &str, shown: bool) {
    let Some(element) = element_by_id::<HtmlElement>(id) else {
        return;
    };
    let display = if shown { "block" } else { "none" };
    if let Err(err) = element.style().set_property("display", display) {
        log::error!("failed to toggle #{}: {:?}", id, err);
    }
}

pub(crate) fn focus(element: &HtmlElement) {
    if let Err(err) = element.focus() {
        log::warn!("focus failed: {:?}", err);
    }
}

/// Raw value of cookie `name` in a `document.cookie` string.
pub(crate) fn find_cookie<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(name)?.strip_prefix('='))
}

pub(crate) fn get_cookie(name: &str) -> Option<String> {
    let cookies = document().dyn_into::<HtmlDocument>().ok()?.cookie().ok()?;
    let raw = find_cookie(&cookies, name)?;
    match js_sys::decode_uri_component(raw) {
        Ok(decoded) => Some(decoded.into()),
        Err(err) => {
            log::warn!("cookie {} is not URI-encoded: {:?}", name, err);
            Some(raw.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_cookie_by_exact_name() {
        let cookies = "sessionid=abc; csrftoken=tok%3D1; csrftoken2=nope";
        assert_eq!(find_cookie(cookies, "csrftoken"), Some("tok%3D1"));
        assert_eq!(find_cookie(cookies, "sessionid"), Some("abc"));
        assert_eq!(find_cookie(cookies, "csrf"), None);
        assert_eq!(find_cookie("", "csrftoken"), None);
    }
}
