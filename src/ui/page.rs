use crate::history::HistoryEntry;
use crate::http::response::HttpResponse;

use super::request_editor::{self, RequestEditorState, pair_row};
use super::{escape_html, response_panel, sidebar, style};

pub struct PageView<'a> {
    pub editor: &'a RequestEditorState,
    pub history: &'a [HistoryEntry],
    pub error: Option<&'a str>,
    pub response: Option<&'a HttpResponse>,
}

pub fn render(page: &PageView<'_>) -> String {
    let error = page
        .error
        .map(|message| {
            format!(
                r#"<div class="alert" role="alert"><strong>Error:</strong> {}</div>
"#,
                escape_html(message)
            )
        })
        .unwrap_or_default();
    let response = page.response.map(response_panel::view).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>reqdesk</title>
<style>
{css}</style>
</head>
<body>
<div class="layout">
{sidebar}<main>
<h1>reqdesk</h1>
{form}{error}{response}</main>
</div>
<template id="header-row">{header_row}</template>
<template id="param-row">{param_row}</template>
<script>
{SCRIPT}</script>
</body>
</html>
"#,
        css = style::stylesheet(),
        sidebar = sidebar::view(page.history),
        form = request_editor::view(page.editor),
        header_row = pair_row("header", "", ""),
        param_row = pair_row("param", "", ""),
    )
}

const SCRIPT: &str = r#"document.addEventListener('DOMContentLoaded', function () {
    document.querySelectorAll('#request-tabs, #response-tabs').forEach(function (container) {
        container.addEventListener('click', function (e) {
            var button = e.target.closest('[data-target]');
            if (!button) return;
            container.querySelectorAll('[data-target]').forEach(function (b) { b.classList.remove('active'); });
            button.classList.add('active');
            container.querySelectorAll('.tab-content').forEach(function (p) { p.classList.add('hidden'); });
            var target = document.getElementById(button.dataset.target + '-content');
            if (target) target.classList.remove('hidden');
        });
    });

    document.querySelectorAll('[data-kind]').forEach(function (section) {
        section.addEventListener('click', function (e) {
            if (e.target.classList.contains('add-pair')) {
                var row = document.getElementById(section.dataset.kind + '-row').content.cloneNode(true);
                section.insertBefore(row, e.target);
            } else if (e.target.classList.contains('remove-pair')) {
                e.target.closest('.pair').remove();
            }
        });
    });

    var methodSelect = document.getElementById('method-select');
    var paramsTab = document.querySelector('#request-tabs [data-target="params"]');
    var bodyTab = document.querySelector('#request-tabs [data-target="body"]');
    function onMethodChange() {
        var isGet = methodSelect.value === 'GET';
        paramsTab.style.display = isGet ? '' : 'none';
        bodyTab.style.display = isGet ? 'none' : '';
        var active = document.querySelector('#request-tabs .tab-button.active');
        if (active && active.style.display === 'none') {
            document.querySelector('#request-tabs [data-target="headers"]').click();
        }
    }
    methodSelect.addEventListener('change', onMethodChange);
    onMethodChange();
});
"#;
