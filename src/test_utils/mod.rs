#![allow(missing_docs)]

pub(crate) mod fixtures;
pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use fixtures::{get_test_store, sample_cdb, sample_goal, sample_transaction};
pub(crate) use form::{assert_form_input, assert_form_select, assert_hx_endpoint, must_get_form};
pub(crate) use html::{
    assert_valid_html, element_text, parse_html_document, parse_html_fragment, select_one,
};
pub(crate) use http::{assert_content_type, assert_hx_redirect, assert_status_ok, get_header};
