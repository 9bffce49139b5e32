use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, Node};

/// read the `content` attribute of `<meta name="{name}">` from the current document
pub fn get_meta_content(name: &str) -> Option<String> {
    match document().query_selector(&format!("meta[name=\"{}\"]", name)) {
        Ok(meta) => meta.and_then(|meta| meta.get_attribute("content")),
        Err(err) => {
            log::error!("query meta {} error: {:?}", name, err);
            None
        }
    }
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

/// nearest ancestor-or-self of the event target matching the selector.
/// text nodes resolve through their parent element
pub fn closest(target: &EventTarget, selector: &str) -> Option<Element> {
    let element = match target.dyn_ref::<Element>() {
        Some(element) => element.clone(),
        None => target.dyn_ref::<Node>()?.parent_element()?,
    };
    match element.closest(selector) {
        Ok(found) => found,
        Err(err) => {
            log::error!("invalid selector {}: {:?}", selector, err);
            None
        }
    }
}

/// like [`closest`], but the match must be a descendant of `container`; the container itself never matches
pub fn closest_within(target: &EventTarget, selector: &str, container: &Element) -> Option<Element> {
    closest(target, selector).filter(|found| {
        let node: &Node = found;
        found != container && container.contains(Some(node))
    })
}
