pub mod config;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use crate::pages::lottery::LotteryPage;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="min-h-screen w-full">
            <div class="mx-auto">
                <LotteryPage />
            </div>
        </div>
    }
}
