//! Template pairs shared by the tests.

pub const BASE_SIMPLE: &str = r#"{% extends "mainbase.html" %}

{% block one %}one{% endblock %}

{% block two %}two{% endblock two %}
"#;

pub const CHILD_SIMPLE: &str = r#"{% extends "_base_simple.html" %}

{% block one %}one{% endblock one %}
{% block two %}two{% endblock %}
"#;

pub const CHILD_PARTIAL_OVERRIDE: &str = r#"{% extends "_base_simple.html" %}

{% block one %}eins{% endblock one %}
"#;

pub const CHILD_WITH_SUPER: &str = r#"{% extends "_base_simple.html" %}

{% block one %}{{ block.super }} and more{% endblock one %}
"#;

pub const CHILD_WITH_LOAD: &str = r#"{% extends "_base_simple.html" %}
{% load humanize %}

{% block one %}{{ count|intcomma }}{% endblock one %}
"#;

pub const BASE_COMPLEX: &str = r#"{% extends "mainbase.html" %}
{% load all the things %}

{% block one %}
    eins {% include "include.html" %}
    {% block yes-one %}
        Y {{ somevar | somefilter }}
    {% endblock yes-one %}
    {{ block.super }}
{% endblock one %}

{% block two %}{% block no-two %}N{% endblock %}default{% endblock two %}
"#;

pub const CHILD_COMPLEX: &str = r#"{% extends "_base_complex.html" %}

{# only the second block is overridden #}
{% block two %}{% block yes-two %}Y{% endblock yes-two %}two {% include "include.html" %}!{{ somevar | somefilter }}{% endblock two %}

{% block unused %}never rendered{% endblock %}
"#;

pub const EXPECTED_COMPLEX: &str = r#"{% extends "mainbase.html" %}
{% load all the things %}

{% block one %}
    eins {% include "include.html" %}
    {% block yes-one %}
        Y {{ somevar | somefilter }}
    {% endblock yes-one %}
    {{ block.super }}
{% endblock one %}

{% block two %}{% block yes-two %}Y{% endblock yes-two %}two {% include "include.html" %}!{{ somevar | somefilter }}{% endblock two %}
"#;
