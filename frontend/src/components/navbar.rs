use yew::prelude::*;

use crate::view::navigation::jump_callback;
use crate::view::sections::SectionId;

const NAV_LINKS: [(&str, SectionId); 3] = [
    ("How it Works", SectionId::HowItWorks),
    ("Benefits", SectionId::Benefits),
    ("For Retailers", SectionId::Retailers),
];

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub active: SectionId,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let active = props.active;
    html! {
        <nav class="top-nav">
            <div class="nav-inner">
                <a href={SectionId::Hero.fragment()} onclick={jump_callback(SectionId::Hero)} class="nav-brand">
                    <div class={classes!("nav-logo-badge", (active == SectionId::Hero).then_some("active"))}>
                        <img src="./logo.png" alt="BharatScan QR Logo" />
                    </div>
                    <span class="nav-brand-name">{"BharatScan"}</span>
                </a>
                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|(label, section)| {
                        let is_active = active == *section;
                        html! {
                            <a
                                href={section.fragment()}
                                onclick={jump_callback(*section)}
                                class={classes!("nav-link", is_active.then_some("active"))}
                            >
                                {*label}
                                if is_active {
                                    <div class="nav-underline"></div>
                                }
                            </a>
                        }
                    }) }
                    <a
                        href={SectionId::Download.fragment()}
                        onclick={jump_callback(SectionId::Download)}
                        class={classes!("nav-download", (active == SectionId::Download).then_some("active"))}
                    >
                        {"Download Now"}
                    </a>
                </div>
            </div>
        </nav>
    }
}
