/// Values substituted for `[year]`, `[fullname]` and `[project]`.
pub struct Placeholders<'a> {
    pub year: &'a str,
    pub fullname: &'a str,
    pub project: &'a str,
}

/// Replaces every placeholder token in `template`. Inserted values are never rescanned.
pub fn render(template: &str, values: &Placeholders) -> String {
    let tokens = [
        ("[year]", values.year),
        ("[fullname]", values.fullname),
        ("[project]", values.project),
    ];

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('[') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        match tokens.iter().find(|(token, _)| tail.starts_with(token)) {
            Some((token, value)) => {
                out.push_str(value);
                rest = &tail[token.len()..];
            }
            None => {
                out.push('[');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);

    out
}
