use yew::prelude::*;

use crate::components::backdrop::ScrollBackdrop;
use crate::components::doodles::{FloatingItems, FrustratedPerson, HappyScanner};
use crate::components::download_card::DownloadCard;
use crate::components::navbar::NavBar;
use crate::config::PageConfig;
use crate::downloads::browser::use_staged_downloads;
use crate::downloads::slot::DownloadTarget;
use crate::view::hooks::{use_active_section, use_initial_fragment};
use crate::view::navigation::jump_callback;
use crate::view::sections::SectionId;

const CART_ITEMS: [(&str, &str, &str); 3] = [
    ("Milk 1L", "₹62", "2"),
    ("Bread 400g", "₹45", "1"),
    ("Zudio T-Shirt", "₹499", "1"),
];

const STEPS: [(u8, &str, &str, &str); 3] = [
    (
        1,
        "Scan",
        "Point your phone camera at the item barcode. The cart updates in real-time.",
        "fas fa-mobile-screen",
    ),
    (
        2,
        "Pay",
        "Choose your favorite UPI, Card, or Wallet for a one-tap secure checkout.",
        "fas fa-credit-card",
    ),
    (
        3,
        "Go",
        "Show your digital receipt QR to the gate assistant and walk right out.",
        "fas fa-circle-check",
    ),
];

const RETAILERS: [(&str, &str); 4] = [
    ("D-Mart", "./dmart.png"),
    ("Zudio", "./zudio.png"),
    ("Reliance Smart", "./reliance.png"),
    ("Westside", "./westside.png"),
];

const MANAGER_FEATURES: [&str; 4] = [
    "Live Store Monitor Desktop App",
    "Advanced AI Shrinkage Prevention",
    "Automated Inventory Re-ordering",
    "Customer Heatmap Analytics",
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let config = use_context::<PageConfig>().unwrap_or_default();
    let active = use_active_section(config.focal_band, config.visibility_threshold);
    use_initial_fragment(config.fragment_jump_delay_ms);
    let (downloads, start_download) = use_staged_downloads(config.download_delay_ms);

    html! {
        <div class="landing-page">
            <ScrollBackdrop />
            <NavBar {active} />

            <header id="hero" class="hero">
                <div class="container hero-grid">
                    <div class="hero-copy">
                        <span class="pill">{"REVOLUTIONIZING RETAIL"}</span>
                        <h1 class="hero-title">
                            {"Skip the Queue, "}<br/>
                            <span class="brand-text">{"Not the Shopping."}</span>
                        </h1>
                        <p class="hero-subtitle">
                            {"The Pan India Smart Checkout System for the Modern Retailer. Scan items as you shop and pay instantly from your phone."}
                        </p>
                        <div class="hero-cta-group">
                            <button class="hero-cta" onclick={jump_callback(SectionId::Download)}>
                                {"Download Mobile App"}
                                <i class="fas fa-arrow-right bob"></i>
                            </button>
                            <button class="hero-secondary" onclick={jump_callback(SectionId::HowItWorks)}>
                                {"Watch Demo"}
                            </button>
                        </div>
                    </div>

                    <div class="hero-visual">
                        <div class="phone">
                            <div class="phone-screen">
                                <div class="phone-notch"></div>
                                <div class="phone-body">
                                    <div class="cart-header">
                                        <span>{"Your Cart"}</span>
                                        <i class="fas fa-bag-shopping"></i>
                                    </div>
                                    <div class="cart-items">
                                        { for CART_ITEMS.iter().enumerate().map(|(idx, (item, price, qty))| html! {
                                            <div class="cart-item" style={format!("animation-delay: {:.1}s;", 1.0 + idx as f64 * 0.2)}>
                                                <div>
                                                    <p class="cart-item-name">{*item}</p>
                                                    <p class="cart-item-qty">{format!("Qty: {}", qty)}</p>
                                                </div>
                                                <p class="cart-item-price">{*price}</p>
                                            </div>
                                        }) }
                                    </div>
                                </div>
                                <div class="cart-footer">
                                    <div class="cart-total">
                                        <span>{"Total"}</span>
                                        <strong>{"₹668.00"}</strong>
                                    </div>
                                    <button class="pay-button" tabindex="-1">
                                        {"Pay Now "}<i class="fas fa-arrow-right"></i>
                                    </button>
                                </div>
                            </div>
                        </div>
                        <FloatingItems />
                    </div>
                </div>
            </header>

            <section class="concept-section">
                <div class="container">
                    <div class="section-heading">
                        <h2>{"Traditional vs BharatScan"}</h2>
                        <p>{"We didn't just digitize the cashier; we eliminated the wait."}</p>
                    </div>
                    <div class="concept-grid">
                        <div class="concept-card old-way">
                            <div class="doodle-frame"><FrustratedPerson /></div>
                            <h3>{"The Old Way"}</h3>
                            <p>{"Long queues, scanning item by item at a slow counter, and manual bagging while everyone watches."}</p>
                        </div>
                        <div class="concept-card new-way">
                            <div class="doodle-frame"><HappyScanner /></div>
                            <h3>{"The BharatScan Way"}</h3>
                            <p>{"BharatScan turns every smartphone into a private checkout counter. Scan, Pay, and leave no queue required."}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section id="how-it-works" class="steps-section">
                <div class="container">
                    <div class="section-heading">
                        <h2>{"Simple as 1-2-3"}</h2>
                        <p>{"Download the app and start shopping smarter today."}</p>
                    </div>
                    <div class="steps-grid">
                        <div class="steps-line"></div>
                        { for STEPS.iter().map(|(step, title, desc, icon)| html! {
                            <div class="step-card">
                                <div class="step-icon"><i class={*icon}></i></div>
                                <div class="step-number">{step.to_string()}</div>
                                <h3>{*title}</h3>
                                <p>{*desc}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="benefits" class="benefits-section">
                <div class="container">
                    <div class="benefits-heading">
                        <h2>{"Smarter. Faster. Private."}</h2>
                        <p>{"Designed for the modern retail experience."}</p>
                    </div>
                    <div class="bento">
                        <div class="bento-card wide deep">
                            <i class="fas fa-rotate bento-watermark"></i>
                            <div>
                                <h3>{"Real-time Sync"}</h3>
                                <p>{"Watch your subtotal update instantly as you add or remove items. No budget surprises at the gate."}</p>
                            </div>
                            <div class="bento-bars">
                                <div class="bar long"></div>
                                <div class="bar short"></div>
                            </div>
                        </div>
                        <div class="bento-card dark">
                            <i class="fas fa-shield-halved bento-icon emerald"></i>
                            <div>
                                <h3>{"Total Privacy"}</h3>
                                <p>{"No chatty cashiers or slow manual tallies. Just you and your shop."}</p>
                            </div>
                        </div>
                        <div class="bento-card sky">
                            <i class="fas fa-bolt bento-icon"></i>
                            <div>
                                <h3>{"Zero-Wait Speed"}</h3>
                                <p>{"Go from 'In-Store' to 'Out-the-Door' in seconds. The fastest checkout in India."}</p>
                            </div>
                        </div>
                        <div class="bento-card wide plain coverage">
                            <div class="coverage-copy">
                                <h3>{"Universal Coverage"}</h3>
                                <p>{"Use BharatScan across major retailers like D-Mart, Zudio, Reliance Smart, and Westside. One app, thousands of stores."}</p>
                            </div>
                            <div class="retailer-logos">
                                { for RETAILERS.iter().map(|(name, logo)| html! {
                                    <div class="retailer-logo">
                                        <img src={*logo} alt={*name} loading="lazy" />
                                    </div>
                                }) }
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section id="retailers" class="retailers-section">
                <div class="retailers-skew"></div>
                <div class="container retailers-grid">
                    <div>
                        <span class="eyebrow">{"B2B ENTERPRISE"}</span>
                        <h2>{"Empower Your "}<br/>{"Store Managers"}</h2>
                        <p class="retailers-lead">
                            {"Monitor live traffic, active carts, and total sales across your entire retail chain in one unified dashboard. Reduce overhead and eliminate shrinkage."}
                        </p>
                        <ul class="manager-features">
                            { for MANAGER_FEATURES.iter().map(|feature| html! {
                                <li>
                                    <span class="check"><i class="fas fa-circle-check"></i></span>
                                    {*feature}
                                </li>
                            }) }
                        </ul>
                        <button class="contact-sales">{"Contact Sales"}</button>
                    </div>

                    // Static mockup, the figures are illustrative only.
                    <div class="dashboard-frame">
                        <div class="dashboard">
                            <div class="dashboard-header">
                                <div class="dashboard-title">
                                    <i class="fas fa-table-columns"></i>
                                    <span>{"Manager Dashboard"}</span>
                                </div>
                                <div class="traffic-lights">
                                    <span class="light red"></span>
                                    <span class="light amber"></span>
                                    <span class="light green"></span>
                                </div>
                            </div>
                            <div class="dashboard-grid">
                                <div class="metric">
                                    <span class="metric-label">{"Live Active Carts"}</span>
                                    <span class="metric-value sky">{"1,248"}</span>
                                </div>
                                <div class="metric">
                                    <span class="metric-label">{"Daily Revenue"}</span>
                                    <span class="metric-value emerald">{"₹4.2M"}</span>
                                </div>
                                <div class="metric wide status">
                                    <div class="status-left">
                                        <span class="pulse"></span>
                                        <span>{"System healthy"}</span>
                                    </div>
                                    <span class="uptime">{"Uptime: 99.99%"}</span>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <footer id="download" class="download-hub">
                <div class="blob blob-left"></div>
                <div class="blob blob-right"></div>
                <div class="container">
                    <div class="section-heading light">
                        <h2>{"Start Scanning Now"}</h2>
                        <p>{"The future of retail is in your pocket."}</p>
                    </div>
                    <div class="download-grid">
                        { for DownloadTarget::ALL.iter().map(|target| html! {
                            <DownloadCard
                                target={*target}
                                phase={downloads.phase(*target)}
                                on_download={start_download.clone()}
                            />
                        }) }
                    </div>
                    <div class="footer-bar">
                        <div class="footer-brand">
                            <a href={SectionId::Hero.fragment()} onclick={jump_callback(SectionId::Hero)} class="footer-logo">
                                <img src="./logo.png" alt="BharatScan Logo" />
                            </a>
                            <span>{"BharatScan"}</span>
                        </div>
                        <div class="footer-links">
                            <a href="#">{"Privacy Policy"}</a>
                            <a href="#">{"Terms of Service"}</a>
                            <a href="#">{"Help Center"}</a>
                        </div>
                        <p class="copyright">{"© 2024 BharatScan Technologies Pvt. Ltd."}</p>
                    </div>
                </div>
            </footer>
            <style>{LANDING_CSS}</style>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        position: relative;
        isolation: isolate;
        min-height: 100vh;
        color: #0f172a;
        font-family: Inter, system-ui, -apple-system, sans-serif;
        overflow-x: hidden;
    }
    .scroll-backdrop {
        position: fixed;
        inset: 0;
        z-index: -1;
        pointer-events: none;
        transition: background-color 0.7s ease;
    }
    .container {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .brand-text {
        color: #1E3A8A;
    }
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        background: rgba(255, 255, 255, 0.7);
        backdrop-filter: blur(12px);
        border-bottom: 1px solid #f1f5f9;
    }
    .nav-inner {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        height: 5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-brand {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        text-decoration: none;
    }
    .nav-logo-badge {
        width: 2.75rem;
        height: 2.75rem;
        border-radius: 0.75rem;
        overflow: hidden;
        background: #94a3b8;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
        transition: transform 0.2s ease;
    }
    .nav-logo-badge.active {
        background: #1E3A8A;
        box-shadow: 0 0 0 2px rgba(30, 58, 138, 0.2);
    }
    .nav-brand:hover .nav-logo-badge {
        transform: scale(1.1);
    }
    .nav-logo-badge img, .footer-logo img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .nav-brand-name {
        font-size: 1.5rem;
        font-weight: 800;
        color: #1E3A8A;
    }
    .nav-links {
        display: flex;
        align-items: center;
        gap: 2rem;
    }
    .nav-link {
        position: relative;
        padding: 0.5rem 0;
        color: #64748b;
        font-weight: 500;
        text-decoration: none;
        transition: color 0.3s ease;
    }
    .nav-link:hover, .nav-link.active {
        color: #1E3A8A;
    }
    .nav-link.active {
        font-weight: 700;
    }
    .nav-underline {
        position: absolute;
        left: 0;
        right: 0;
        bottom: 0;
        height: 2px;
        border-radius: 9999px;
        background: #1E3A8A;
    }
    .nav-download {
        padding: 0.625rem 1.5rem;
        border-radius: 9999px;
        font-weight: 700;
        text-decoration: none;
        background: #1E3A8A;
        color: white;
        transition: all 0.2s ease;
    }
    .nav-download:hover {
        transform: translateY(-2px);
        box-shadow: 0 10px 15px rgba(191, 219, 254, 0.8);
    }
    .nav-download.active {
        background: #B6E3F4;
        color: #1E3A8A;
        box-shadow: 0 0 0 4px rgba(182, 227, 244, 0.3);
    }
    .hero {
        position: relative;
        padding: 10rem 0 5rem;
        overflow: hidden;
    }
    .hero-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
        align-items: center;
    }
    .hero-copy {
        animation: rise 0.8s ease-out both;
    }
    .pill {
        display: inline-block;
        padding: 0.375rem 1rem;
        border-radius: 9999px;
        background: #B6E3F4;
        color: #1E3A8A;
        font-weight: 700;
        font-size: 0.875rem;
        margin-bottom: 1.5rem;
    }
    .hero-title {
        font-size: 4.5rem;
        font-weight: 900;
        line-height: 1.1;
        margin: 0 0 1.5rem;
    }
    .hero-subtitle {
        font-size: 1.25rem;
        color: #475569;
        max-width: 32rem;
        line-height: 1.6;
        margin-bottom: 2.5rem;
    }
    .hero-cta-group {
        display: flex;
        gap: 1rem;
    }
    .hero-cta, .hero-secondary {
        padding: 1rem 2rem;
        border-radius: 1rem;
        font-weight: 700;
        font-size: 1.125rem;
        cursor: pointer;
        transition: transform 0.2s ease, background 0.2s ease;
    }
    .hero-cta {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        background: #1E3A8A;
        color: white;
        border: none;
        box-shadow: 0 20px 25px rgba(30, 58, 138, 0.2);
    }
    .hero-cta:hover {
        transform: scale(1.05);
    }
    .hero-cta:active {
        transform: scale(0.95);
    }
    .hero-secondary {
        background: transparent;
        color: #1E3A8A;
        border: 2px solid #B6E3F4;
    }
    .hero-secondary:hover {
        background: rgba(182, 227, 244, 0.3);
    }
    .bob {
        animation: bob 1.5s ease-in-out infinite;
    }
    .hero-visual {
        position: relative;
    }
    .phone {
        position: relative;
        z-index: 10;
        margin: 0 auto;
        width: 100%;
        max-width: 320px;
        aspect-ratio: 9 / 18.5;
        background: #0f172a;
        border: 4px solid #1e293b;
        border-radius: 3rem;
        padding: 0.75rem;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
        animation: pop 1s ease 0.2s both;
    }
    .phone-screen {
        position: relative;
        width: 100%;
        height: 100%;
        background: white;
        border-radius: 2.5rem;
        overflow: hidden;
        display: flex;
        flex-direction: column;
    }
    .phone-notch {
        position: absolute;
        top: 0;
        left: 50%;
        transform: translateX(-50%);
        width: 33%;
        height: 1.5rem;
        background: #0f172a;
        border-radius: 0 0 1rem 1rem;
        z-index: 20;
    }
    .phone-body {
        flex: 1;
        padding: 3rem 1.5rem 1.5rem;
    }
    .cart-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        margin-bottom: 2rem;
        font-weight: 700;
        font-size: 1.25rem;
        color: #1E3A8A;
    }
    .cart-items {
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .cart-item {
        display: flex;
        justify-content: space-between;
        padding: 0.75rem;
        background: #f8fafc;
        border-radius: 0.75rem;
        animation: slide-in 0.5s ease both;
    }
    .cart-item p {
        margin: 0;
    }
    .cart-item-name {
        font-weight: 700;
        color: #1e293b;
    }
    .cart-item-qty {
        font-size: 0.75rem;
        color: #64748b;
    }
    .cart-item-price {
        font-weight: 700;
        color: #1E3A8A;
    }
    .cart-footer {
        padding: 1.5rem;
        background: #f8fafc;
        border-top: 1px solid #f1f5f9;
    }
    .cart-total {
        display: flex;
        justify-content: space-between;
        margin-bottom: 1rem;
        color: #64748b;
    }
    .cart-total strong {
        font-size: 1.5rem;
        font-weight: 900;
        color: #0f172a;
    }
    .pay-button {
        width: 100%;
        padding: 1rem;
        border: none;
        border-radius: 0.75rem;
        background: #1E3A8A;
        color: white;
        font-weight: 700;
    }
    .floating-items {
        position: absolute;
        inset: 0;
        pointer-events: none;
    }
    .floating-item {
        position: absolute;
        will-change: transform;
    }
    .floating-doodle {
        width: 4rem;
        height: 4rem;
        opacity: 0.4;
    }
    .section-heading {
        text-align: center;
        margin-bottom: 5rem;
    }
    .section-heading h2 {
        font-size: 3rem;
        font-weight: 900;
        margin-bottom: 1.5rem;
    }
    .section-heading p {
        font-size: 1.25rem;
        color: #475569;
    }
    .section-heading.light h2 {
        color: white;
    }
    .section-heading.light p {
        color: #bfdbfe;
    }
    .concept-section {
        padding: 6rem 0;
        background: white;
    }
    .concept-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
        align-items: center;
    }
    .concept-card {
        padding: 2.5rem;
        border-radius: 1.5rem;
    }
    .concept-card h3 {
        font-size: 1.5rem;
        font-weight: 700;
        margin-bottom: 1rem;
    }
    .old-way {
        background: #f8fafc;
        border: 1px solid #e2e8f0;
        color: #0f172a;
    }
    .old-way p {
        color: #475569;
    }
    .new-way {
        background: #1E3A8A;
        color: white;
        box-shadow: 0 25px 50px rgba(191, 219, 254, 0.8);
    }
    .new-way p {
        color: #dbeafe;
    }
    .doodle-frame {
        width: 100%;
        aspect-ratio: 1;
        margin-bottom: 2rem;
    }
    .doodle {
        width: 100%;
        height: 100%;
    }
    .steps-section {
        padding: 8rem 0;
    }
    .steps-grid {
        position: relative;
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .steps-line {
        position: absolute;
        top: 50%;
        left: 0;
        right: 0;
        height: 4px;
        background: rgba(30, 58, 138, 0.1);
        transform: translateY(-50%);
        z-index: -1;
    }
    .step-card {
        background: white;
        padding: 2.5rem;
        border-radius: 2.5rem;
        border: 1px solid #f1f5f9;
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.08);
        text-align: center;
        display: flex;
        flex-direction: column;
        align-items: center;
        transition: transform 0.3s ease;
    }
    .step-card:hover {
        transform: translateY(-10px);
    }
    .step-icon {
        width: 5rem;
        height: 5rem;
        border-radius: 1.5rem;
        background: #1E3A8A;
        color: white;
        font-size: 2rem;
        display: flex;
        align-items: center;
        justify-content: center;
        margin-bottom: 2rem;
        transition: transform 0.3s ease, background 0.3s ease;
    }
    .step-card:hover .step-icon {
        transform: scale(1.1);
        background: #3B82F6;
    }
    .step-number {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 9999px;
        background: #B6E3F4;
        color: #1E3A8A;
        font-weight: 900;
        display: flex;
        align-items: center;
        justify-content: center;
        margin-bottom: 1rem;
    }
    .step-card h3 {
        font-size: 1.5rem;
        font-weight: 700;
        margin-bottom: 1rem;
    }
    .step-card p {
        color: #475569;
        line-height: 1.6;
    }
    .benefits-section {
        padding: 6rem 0;
    }
    .benefits-heading {
        margin-bottom: 4rem;
    }
    .benefits-heading h2 {
        font-size: 2.25rem;
        font-weight: 900;
        margin-bottom: 1rem;
    }
    .benefits-heading p {
        font-size: 1.125rem;
        color: #475569;
    }
    .bento {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        grid-auto-rows: 250px;
        gap: 1.5rem;
    }
    .bento-card {
        position: relative;
        padding: 2.5rem;
        border-radius: 2.5rem;
        display: flex;
        flex-direction: column;
        justify-content: space-between;
        overflow: hidden;
    }
    .bento-card.wide {
        grid-column: span 2;
    }
    .bento-card h3 {
        font-size: 1.5rem;
        font-weight: 800;
        margin: 0 0 0.5rem;
    }
    .bento-card.deep {
        background: #1E3A8A;
        color: white;
    }
    .bento-card.deep h3, .coverage h3 {
        font-size: 1.875rem;
        font-weight: 900;
    }
    .bento-card.deep p {
        color: #dbeafe;
        font-size: 1.125rem;
        max-width: 28rem;
    }
    .bento-watermark {
        position: absolute;
        right: -2rem;
        top: -2rem;
        font-size: 12rem;
        color: #1e40af;
        transition: transform 0.7s ease;
    }
    .bento-card:hover .bento-watermark {
        transform: rotate(45deg);
    }
    .bento-bars {
        display: flex;
        gap: 0.5rem;
    }
    .bar {
        height: 0.5rem;
        border-radius: 9999px;
    }
    .bar.long {
        width: 3rem;
        background: #B6E3F4;
    }
    .bar.short {
        width: 1rem;
        background: #1d4ed8;
    }
    .bento-card.dark {
        background: #0f172a;
        color: white;
    }
    .bento-card.dark p {
        color: #94a3b8;
    }
    .bento-card.sky {
        background: #B6E3F4;
        color: #1E3A8A;
    }
    .bento-card.sky p {
        color: #334155;
    }
    .bento-icon {
        font-size: 3rem;
        transition: transform 0.3s ease;
    }
    .bento-card:hover .bento-icon {
        transform: scale(1.15);
    }
    .emerald {
        color: #34d399;
    }
    .bento-card.plain {
        background: white;
        border: 1px solid #e2e8f0;
        flex-direction: row;
        align-items: center;
        gap: 2rem;
    }
    .coverage-copy {
        flex: 1;
    }
    .coverage-copy p {
        color: #475569;
        font-size: 1.125rem;
    }
    .retailer-logos {
        display: flex;
    }
    .retailer-logo {
        width: 4rem;
        height: 4rem;
        margin-left: -1rem;
        border-radius: 9999px;
        border: 4px solid white;
        background: white;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
    }
    .retailer-logo img {
        width: 2.5rem;
        height: 2.5rem;
        object-fit: contain;
    }
    .retailers-section {
        position: relative;
        padding: 6rem 0;
        background: #0f172a;
        color: white;
        overflow: hidden;
    }
    .retailers-skew {
        position: absolute;
        top: 0;
        right: 0;
        width: 50%;
        height: 100%;
        background: rgba(30, 58, 138, 0.2);
        transform: skewX(12deg) translateX(50%);
    }
    .retailers-grid {
        position: relative;
        z-index: 10;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
        align-items: center;
    }
    .eyebrow {
        display: block;
        color: #B6E3F4;
        font-weight: 700;
        margin-bottom: 1rem;
    }
    .retailers-grid h2 {
        font-size: 3.75rem;
        font-weight: 900;
        line-height: 1.15;
        margin: 0 0 2rem;
    }
    .retailers-lead {
        font-size: 1.25rem;
        color: #cbd5e1;
        line-height: 1.6;
        margin-bottom: 2.5rem;
    }
    .manager-features {
        list-style: none;
        padding: 0;
        margin: 0 0 3rem;
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .manager-features li {
        display: flex;
        align-items: center;
        gap: 1rem;
        font-size: 1.125rem;
        color: #e2e8f0;
    }
    .check {
        width: 1.5rem;
        height: 1.5rem;
        border-radius: 9999px;
        background: rgba(182, 227, 244, 0.2);
        color: #B6E3F4;
        font-size: 0.875rem;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .contact-sales {
        padding: 1rem 2.5rem;
        border: none;
        border-radius: 1rem;
        background: white;
        color: #0f172a;
        font-weight: 700;
        font-size: 1.125rem;
        cursor: pointer;
    }
    .contact-sales:active {
        transform: scale(0.95);
    }
    .dashboard-frame {
        background: #1e293b;
        padding: 1rem;
        border-radius: 1.5rem;
        border: 1px solid #334155;
    }
    .dashboard {
        background: #0f172a;
        border-radius: 1rem;
        padding: 1.5rem;
        aspect-ratio: 16 / 9;
        display: flex;
        flex-direction: column;
    }
    .dashboard-header {
        display: flex;
        align-items: center;
        justify-content: space-between;
        margin-bottom: 2rem;
    }
    .dashboard-title {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        font-weight: 700;
    }
    .dashboard-title i {
        color: #B6E3F4;
    }
    .traffic-lights {
        display: flex;
        gap: 0.5rem;
    }
    .light {
        width: 0.75rem;
        height: 0.75rem;
        border-radius: 9999px;
    }
    .light.red { background: #ef4444; }
    .light.amber { background: #f59e0b; }
    .light.green { background: #10b981; }
    .dashboard-grid {
        flex: 1;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1rem;
    }
    .metric {
        background: #1e293b;
        border: 1px solid rgba(51, 65, 85, 0.5);
        border-radius: 0.75rem;
        padding: 1rem;
        display: flex;
        flex-direction: column;
        justify-content: space-between;
    }
    .metric.wide {
        grid-column: span 2;
    }
    .metric.status {
        flex-direction: row;
        align-items: center;
        background: rgba(30, 41, 59, 0.5);
        border: none;
    }
    .metric-label {
        font-size: 0.75rem;
        color: #94a3b8;
        text-transform: uppercase;
        font-weight: 700;
        letter-spacing: 0.05em;
    }
    .metric-value {
        font-size: 1.875rem;
        font-weight: 900;
    }
    .metric-value.sky { color: #B6E3F4; }
    .metric-value.emerald { color: #34d399; }
    .status-left {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        font-size: 0.875rem;
    }
    .pulse {
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 9999px;
        background: #B6E3F4;
        animation: pulse 2s ease-in-out infinite;
    }
    .uptime {
        font-size: 0.75rem;
        color: #64748b;
        font-family: ui-monospace, monospace;
    }
    .download-hub {
        position: relative;
        padding: 6rem 0;
        background: #1E3A8A;
        overflow: hidden;
    }
    .blob {
        position: absolute;
        border-radius: 9999px;
    }
    .blob-left {
        top: 50%;
        left: 25%;
        width: 24rem;
        height: 24rem;
        background: rgba(182, 227, 244, 0.2);
        filter: blur(100px);
        transform: translateY(-50%);
    }
    .blob-right {
        bottom: 0;
        right: 0;
        width: 16rem;
        height: 16rem;
        background: rgba(96, 165, 250, 0.1);
        filter: blur(80px);
    }
    .download-hub .container {
        position: relative;
        z-index: 10;
    }
    .download-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 2rem;
        max-width: 56rem;
        margin: 0 auto 5rem;
    }
    .download-card {
        padding: 2.5rem;
        border-radius: 3rem;
        display: flex;
        flex-direction: column;
        align-items: center;
        text-align: center;
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.1);
        backdrop-filter: blur(12px);
        transition: transform 0.3s ease, background 0.3s ease;
    }
    .download-card:hover {
        transform: translateY(-10px);
        background: rgba(255, 255, 255, 0.1);
    }
    .download-icon {
        width: 6rem;
        height: 6rem;
        border-radius: 1.5rem;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 3rem;
        margin-bottom: 2rem;
        transition: transform 0.3s ease;
    }
    .download-card:hover .download-icon {
        transform: scale(1.1);
    }
    .download-card.mobile .download-icon {
        background: #B6E3F4;
        color: #1E3A8A;
    }
    .download-card.desktop .download-icon {
        background: #0f172a;
        color: #B6E3F4;
    }
    .download-card h3 {
        font-size: 1.875rem;
        font-weight: 900;
        color: white;
        margin-bottom: 1rem;
    }
    .download-card p {
        color: #dbeafe;
        margin-bottom: 2rem;
    }
    .download-button {
        width: 100%;
        padding: 1.25rem;
        border: none;
        border-radius: 1rem;
        font-weight: 900;
        font-size: 1.25rem;
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.75rem;
        cursor: pointer;
        transition: all 0.2s ease;
    }
    .download-card.mobile .download-button {
        background: white;
        color: #1E3A8A;
    }
    .download-card.desktop .download-button {
        background: #0f172a;
        color: white;
    }
    .download-button:active {
        transform: scale(0.95);
    }
    .download-button.pending {
        opacity: 0.8;
        cursor: not-allowed;
    }
    .footer-bar {
        padding-top: 4rem;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
        display: flex;
        justify-content: space-between;
        align-items: center;
        gap: 2rem;
    }
    .footer-brand {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        font-size: 1.25rem;
        font-weight: 900;
        color: white;
    }
    .footer-logo {
        width: 2.25rem;
        height: 2.25rem;
        border-radius: 0.5rem;
        background: #B6E3F4;
        overflow: hidden;
    }
    .footer-links {
        display: flex;
        gap: 2.5rem;
    }
    .footer-links a {
        color: #bfdbfe;
        font-weight: 500;
        text-decoration: none;
    }
    .footer-links a:hover {
        color: white;
    }
    .copyright {
        color: rgba(147, 197, 253, 0.6);
        font-size: 0.875rem;
    }
    @keyframes rise {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes pop {
        from { opacity: 0; transform: scale(0.8); }
        to { opacity: 1; transform: scale(1); }
    }
    @keyframes slide-in {
        from { opacity: 0; transform: translateX(20px); }
        to { opacity: 1; transform: translateX(0); }
    }
    @keyframes bob {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-4px); }
    }
    @keyframes pulse {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.4; }
    }
    @media (max-width: 768px) {
        .nav-links {
            display: none;
        }
        .hero-grid, .concept-grid, .steps-grid, .retailers-grid, .download-grid {
            grid-template-columns: 1fr;
        }
        .hero-title {
            font-size: 3rem;
        }
        .hero-cta-group {
            flex-direction: column;
        }
        .floating-items, .steps-line {
            display: none;
        }
        .bento {
            grid-template-columns: 1fr;
        }
        .bento-card.wide {
            grid-column: auto;
        }
        .bento-card.plain {
            flex-direction: column;
        }
        .retailers-grid h2 {
            font-size: 2.25rem;
        }
        .footer-bar {
            flex-direction: column;
        }
    }
"#;
