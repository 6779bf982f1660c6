use yew::prelude::*;

use crate::downloads::slot::{DownloadTarget, SlotPhase};

#[derive(Properties, PartialEq)]
pub struct DownloadCardProps {
    pub target: DownloadTarget,
    pub phase: SlotPhase,
    pub on_download: Callback<DownloadTarget>,
}

/// A download card. The button stays disabled while its slot is preparing.
#[function_component(DownloadCard)]
pub fn download_card(props: &DownloadCardProps) -> Html {
    let target = props.target;
    let pending = props.phase == SlotPhase::Preparing;
    let (variant, icon, title, blurb) = match target {
        DownloadTarget::Mobile => (
            "mobile",
            "fas fa-mobile-screen-button",
            "Mobile App",
            "Download for Android to start shopping faster instantly.",
        ),
        DownloadTarget::Desktop => (
            "desktop",
            "fas fa-desktop",
            "Store Dashboard",
            "For retailers looking to integrate our management suite.",
        ),
    };
    let onclick = {
        let on_download = props.on_download.clone();
        Callback::from(move |_: MouseEvent| on_download.emit(target))
    };
    html! {
        <div class={classes!("download-card", variant)}>
            <div class="download-icon">
                <i class={icon}></i>
            </div>
            <h3>{title}</h3>
            <p>{blurb}</p>
            <button
                class={classes!("download-button", pending.then_some("pending"))}
                disabled={pending}
                data-slot={target.name()}
                {onclick}
            >
                if pending {
                    <i class="fas fa-spinner fa-spin"></i>
                    {target.pending_label()}
                } else {
                    {target.idle_label()}
                    <i class="fas fa-arrow-right"></i>
                }
            </button>
        </div>
    }
}
