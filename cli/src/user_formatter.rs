// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use thirtyboxes_api::Value;

use crate::util::{OutputFormat, to_raw};

#[derive(Debug)]
pub struct UserFormatter {
    format: OutputFormat,
}

impl UserFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, user: &Value) -> String {
        match self.format {
            OutputFormat::Raw => to_raw(user),
            OutputFormat::Short => short_line(user),
            OutputFormat::Long => block_lines(user).join("\n"),
        }
    }
}

/// `user First Last (1234): primary@mail, site, im:addr, other@mail`
fn short_line(user: &Value) -> String {
    let mut s = format!(
        "user {} {} ({})",
        text(user, "firstName"),
        text(user, "lastName"),
        user.get("id").map(ToString::to_string).unwrap_or_default(),
    );

    let mut extras = Vec::new();
    let mut tail_extras = Vec::new();
    for email in list(user, "emails") {
        let address = text(email, "address").to_string();
        if email.get("primary").and_then(Value::as_bool).unwrap_or(false) {
            extras.push(address);
        } else {
            tail_extras.push(address);
        }
    }
    if let Some(site) = user.get("personalSite").and_then(Value::as_str) {
        if !site.is_empty() {
            extras.push(site.to_string());
        }
    }
    if let Some(im) = user.get("IM").and_then(Value::as_map) {
        for (kind, address) in im {
            let address = address.to_string();
            if !address.is_empty() {
                extras.push(format!("{}:{address}", kind.to_lowercase()));
            }
        }
    }
    extras.append(&mut tail_extras);

    if !extras.is_empty() {
        s.push_str(": ");
        s.push_str(&extras.join(", "));
    }
    s
}

fn block_lines(user: &Value) -> Vec<String> {
    let scalar_keys = ["id", "personalSite", "avatar", "createDate", "startDay", "use24HourClock"];
    let printed: Vec<&str> = scalar_keys
        .iter()
        .copied()
        .filter(|key| user.get(key).is_some())
        .collect();

    let width = printed
        .iter()
        .map(|key| key.len())
        .chain(["name", "emails", "IM", "feeds"].iter().map(|key| key.len()))
        .max()
        .unwrap_or(0);

    let mut lines = vec![
        "--- 30boxes user".to_string(),
        format!(
            "{:<width$} : {} {}",
            "name",
            text(user, "firstName"),
            text(user, "lastName"),
        ),
    ];
    for key in printed {
        let value = user.get(key).map(ToString::to_string).unwrap_or_default();
        lines.push(format!("{key:<width$} : {value}"));
    }

    let emails = list(user, "emails");
    if !emails.is_empty() {
        lines.push(format!("{:<width$} :", "emails"));
        for email in emails {
            let address = text(email, "address");
            if email.get("primary").and_then(Value::as_bool).unwrap_or(false) {
                lines.push(format!("  - {address} (primary)"));
            } else {
                lines.push(format!("  - {address}"));
            }
        }
    }

    if let Some(im) = user.get("IM").and_then(Value::as_map) {
        let entries: Vec<_> = im
            .iter()
            .filter(|(_, address)| !address.to_string().is_empty())
            .collect();
        if !entries.is_empty() {
            lines.push(format!("{:<width$} :", "IM"));
            for (kind, address) in entries {
                lines.push(format!("  - {address} ({kind})"));
            }
        }
    }

    let feeds = list(user, "feeds");
    if !feeds.is_empty() {
        lines.push(format!("{:<width$} :", "feeds"));
        for feed in feeds {
            lines.push(format!("  - {} ({})", text(feed, "name"), text(feed, "url")));
        }
    }

    lines
}

fn text<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or_default()
}

fn list<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value.get(key).and_then(Value::as_list).unwrap_or_default()
}
