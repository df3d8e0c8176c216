use crate::components::editor::EditorComponent;
use crate::components::theme::ThemeSwitcher;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="coverletter-editor">
                <ThemeSwitcher />
                <EditorComponent />
            </div>
        }
    }
}
