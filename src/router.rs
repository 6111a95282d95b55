use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::guard::RequireSession;
use crate::pages::assets::AssetsPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::goals::GoalsPage;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::signup::SignupPage;
use crate::pages::transactions::TransactionsPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/transactions")]
    Transactions,
    #[at("/goals")]
    Goals,
    #[at("/assets")]
    Assets,
    #[at("/profile")]
    Profile,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    log::debug!("Routing to: {:?}", route);
    match route {
        Route::Home | Route::Dashboard => {
            log::trace!("Rendering Dashboard page");
            html! { <RequireSession><DashboardPage /></RequireSession> }
        }
        Route::Transactions => {
            log::trace!("Rendering Transactions page");
            html! { <RequireSession><TransactionsPage /></RequireSession> }
        }
        Route::Goals => {
            log::trace!("Rendering Goals page");
            html! { <RequireSession><GoalsPage /></RequireSession> }
        }
        Route::Assets => {
            log::trace!("Rendering Assets page");
            html! { <RequireSession><AssetsPage /></RequireSession> }
        }
        Route::Profile => {
            log::trace!("Rendering Profile page");
            html! { <RequireSession><ProfilePage /></RequireSession> }
        }
        Route::Login => {
            log::trace!("Rendering Login page");
            html! { <LoginPage /> }
        }
        Route::Signup => {
            log::trace!("Rendering Signup page");
            html! { <SignupPage /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! {
                <div class="hero min-h-screen bg-base-200">
                    <div class="hero-content text-center">
                        <div>
                            <h1 class="text-5xl font-bold">{"404"}</h1>
                            <p class="py-6">{"This page does not exist."}</p>
                            <Link<Route> to={Route::Home} classes="btn btn-primary">{"Back to Dashboard"}</Link<Route>>
                        </div>
                    </div>
                </div>
            }
        }
    }
}
