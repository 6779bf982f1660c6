use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page wandered off the shelf."}</p>
            <Link<Route> to={Route::Landing} classes="not-found-home">
                {"Back to BharatScan"}
            </Link<Route>>
            <style>{r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    font-family: Inter, system-ui, sans-serif;
                    color: #0f172a;
                }
                .not-found h1 {
                    font-size: 6rem;
                    font-weight: 900;
                    color: #1E3A8A;
                    margin: 0;
                }
                .not-found p {
                    color: #64748b;
                }
                .not-found-home {
                    padding: 0.75rem 2rem;
                    border-radius: 9999px;
                    background: #1E3A8A;
                    color: white;
                    font-weight: 700;
                    text-decoration: none;
                }
            "#}</style>
        </div>
    }
}
