use crate::error::MountError;
use crate::fx::content::Entry;
use crate::fx::Portfolio;
use web_sys as web;

fn slot(root: &web::Element, field: &str) -> Option<web::Element> {
    root.query_selector(&format!("[data-field=\"{field}\"]"))
        .ok()
        .flatten()
}

fn element(document: &web::Document, tag: &str, class: &str) -> Option<web::Element> {
    let el = document.create_element(tag).ok()?;
    el.set_class_name(class);
    Some(el)
}

fn entry_element(document: &web::Document, entry: &Entry) -> Option<web::Element> {
    let card = element(document, "article", "entry")?;
    let heading = element(document, "h3", "entry-heading")?;
    heading.set_text_content(Some(&entry.heading));
    _ = card.append_child(&heading);
    if let Some(period) = &entry.period {
        let p = element(document, "span", "entry-period")?;
        p.set_text_content(Some(period));
        _ = card.append_child(&p);
    }
    let detail = element(document, "p", "entry-detail")?;
    detail.set_text_content(Some(&entry.detail));
    _ = card.append_child(&detail);
    if let Some(href) = &entry.link {
        let a = element(document, "a", "entry-link")?;
        _ = a.set_attribute("href", href);
        _ = a.set_attribute("target", "_blank");
        _ = a.set_attribute("rel", "noopener noreferrer");
        a.set_text_content(Some(href));
        _ = card.append_child(&a);
    }
    Some(card)
}

/// Fill the `[data-field]` slots under `root` from `portfolio`. Slots that
/// are absent from the markup are skipped.
pub fn render(
    document: &web::Document,
    root: &web::Element,
    portfolio: &Portfolio,
) -> Result<(), MountError> {
    let missing = portfolio.missing_fields();
    if !missing.is_empty() {
        log::warn!("[content] empty fields: {}", missing.join(", "));
    }

    if let Some(el) = slot(root, "name") {
        el.set_text_content(Some(&portfolio.name));
    }
    if let Some(el) = slot(root, "title") {
        el.set_text_content(Some(&portfolio.title));
    }
    if let Some(list) = slot(root, "skills") {
        list.set_text_content(None);
        for skill in &portfolio.skills {
            let badge = element(document, "span", "badge")
                .ok_or_else(|| MountError::Dom("createElement"))?;
            badge.set_text_content(Some(skill));
            // Badges take part in the proximity emphasis.
            _ = badge.set_attribute("data-emphasis", "");
            _ = list.append_child(&badge);
        }
    }
    for (field, entries) in portfolio.sections() {
        let Some(list) = slot(root, field) else {
            continue;
        };
        list.set_text_content(None);
        for entry in entries {
            let card = entry_element(document, entry)
                .ok_or_else(|| MountError::Dom("createElement"))?;
            _ = list.append_child(&card);
        }
    }
    Ok(())
}
