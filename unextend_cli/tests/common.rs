#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub const BASE: &str = r#"<html>
<title>{% block title %}Site{% endblock %}</title>
{% block body %}{% endblock body %}
</html>
"#;

pub const PAGE: &str = r#"{% extends "base.html" %}

{% block body %}<p>{{ page.intro|safe }}</p>{% endblock %}
"#;

pub const FLATTENED: &str = r#"<html>
<title>{% block title %}Site{% endblock title %}</title>
{% block body %}<p>{{ page.intro|safe }}</p>{% endblock body %}
</html>
"#;

pub fn unextend_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("unextend"));
	cmd.env("NO_COLOR", "1");
	cmd
}

pub fn write(path: &Path, contents: &str) -> std::io::Result<()> {
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent)?;
	}
	std::fs::write(path, contents)
}
