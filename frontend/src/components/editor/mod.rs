//! Cover-letter editor: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and DOM helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `EditorProps`, `EditorComponent`).
//! - Provide the `Component` implementation that delegates to `update::update`
//!   and `view::view`.
//! - On first render, populate the surface from the host page's hidden fields
//!   (rendered markup wins over plain text) and install the submit hook that
//!   writes the surface back into those fields before the form serializes.

use yew::prelude::*;

use common::model::letter::InitialContent;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::EditorProps;
pub use state::EditorComponent;

impl Component for EditorComponent {
    type Message = Msg;
    type Properties = EditorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        EditorComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let props = ctx.props();
            let markup = helpers::input_value(&props.html_field_id).unwrap_or_default();
            let text = helpers::input_value(&props.text_field_id).unwrap_or_default();

            match InitialContent::from_fields(&markup, &text) {
                InitialContent::Markup(markup) => self.set_markup(&markup),
                InitialContent::PlainText(text) => self.set_plain_text(&text),
                InitialContent::Empty => {}
            }

            helpers::install_submit_hook(
                &props.form_id,
                self.surface_ref.clone(),
                props.text_field_id.to_string(),
                props.html_field_id.to_string(),
            );
        }
    }
}
