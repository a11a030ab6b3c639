//! Built-in templates, used when no override directory provides them.
//! Overrides may `{% extends %}` any of these; `page.html` exposes a `main`
//! block.
//!
//! Hrefs are authored in source and emitted with `safe` so they are not
//! entity-encoded; every other value goes through Tera's autoescaping.

pub(super) const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{ title }} | {{ site_title }}</title>
</head>
<body class="page page--{{ path | slug }}">
<header class="site-header">
<a class="site-name" href="/">{{ site_title }}</a>
<a href="/samples">Samples</a>
<form class="site-search" action="/search" method="get">
<input type="search" name="q" value="{{ query | default(value="") }}">
</form>
</header>
{% block main %}<main>
<h1>{{ title }}</h1>
{{ content | safe }}
</main>{% endblock main %}
</body>
</html>
"#;

pub(super) const MENU: &str = r#"<nav class="menu menu--{{ registry }}">
{% for group in categories %}
<section class="menu-category">
<h2>{{ group.name }}</h2>
<ul>
{% for item in group.items %}
<li>
<a href="{{ item.href | safe }}">{{ item.label }}</a>
<p>{{ item.description }}</p>
{% if item.tags %}<ul class="tags">{% for tag in item.tags %}<li>{{ tag }}</li>{% endfor %}</ul>{% endif %}
</li>
{% endfor %}
</ul>
</section>
{% endfor %}
</nav>
"#;

pub(super) const NODE: &str = r#"<article class="node">
<p class="category">{{ item.category }}</p>
<p class="description">{{ item.description }}</p>
{% if item.tags %}<ul class="tags">{% for tag in item.tags %}<li><a href="/search?q={{ tag | urlencode | safe }}">{{ tag }}</a></li>{% endfor %}</ul>{% endif %}
{% if see_also %}
<section class="see-also">
<h2>See also</h2>
<ul>
{% for link in see_also %}<li data-key="{{ link.key }}"><a href="{{ link.href | safe }}">{{ link.label }}</a></li>
{% endfor %}
</ul>
</section>
{% endif %}
{% if referenced_by %}
<section class="referenced-by">
<h2>Referenced by</h2>
<ul>
{% for node in referenced_by %}<li><a href="{{ node.href | safe }}">{{ node.label }}</a></li>
{% endfor %}
</ul>
</section>
{% endif %}
</article>
"#;

pub(super) const SEARCH: &str = r#"{% if results %}
<ul class="search-results">
{% for item in results %}<li><a href="{{ item.href | safe }}">{{ item.label }}</a> <span class="category">{{ item.category }}</span></li>
{% endfor %}
</ul>
{% elif query %}
<p class="search-empty">No pages match "{{ query }}".</p>
{% else %}
<ul class="tag-cloud">
{% for tag in tags %}<li><a href="/search?q={{ tag | urlencode | safe }}">{{ tag }}</a></li>
{% endfor %}
</ul>
{% endif %}
"#;

/// (name, source) pairs registered by [`super::ThemeEngine`].
pub(super) const BUILTIN: [(&str, &str); 4] = [
    ("page.html", PAGE),
    ("menu.html", MENU),
    ("node.html", NODE),
    ("search.html", SEARCH),
];
