use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::icons::{Icon, SvgIcon};
use crate::config::{BRAND_FIRST, BRAND_SECOND, COMPANY_NAME};

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, COMPANY_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #0f172a;
                        color: #94a3b8;
                        padding: 3rem 0;
                        border-top: 1px solid #1e293b;
                    }
                    .footer-row {
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .footer-brand {
                        display: flex;
                        gap: 0.5rem;
                        font-size: 1.5rem;
                        font-weight: 700;
                        letter-spacing: -0.05em;
                    }
                    .footer-brand .red { color: #dc2626; }
                    .footer-brand .blue { color: #1d4ed8; }
                    .footer-links { display: flex; gap: 1.5rem; }
                    .footer-links a {
                        color: inherit;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .footer-links a:hover { color: #fff; }
                    .footer-social { display: flex; gap: 1rem; }
                    .footer-social a {
                        width: 2.5rem;
                        height: 2.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 9999px;
                        background: #1e293b;
                        color: inherit;
                        transition: all 0.2s;
                    }
                    .footer-social a:hover { background: #2563eb; color: #fff; }
                    .footer-copy {
                        margin-top: 2rem;
                        padding-top: 2rem;
                        border-top: 1px solid #1e293b;
                        text-align: center;
                        font-size: 0.875rem;
                    }
                    @media (min-width: 768px) {
                        .footer-row { flex-direction: row; }
                    }
                "#}
            </style>
            <div class="container">
                <div class="footer-row">
                    <div class="footer-brand">
                        <span class="red">{BRAND_FIRST}</span>
                        <span class="blue">{BRAND_SECOND}</span>
                    </div>
                    <div class="footer-links">
                        <a href="#">{"Privacy Policy"}</a>
                        <a href="#">{"Terms of Service"}</a>
                    </div>
                    <div class="footer-social">
                        <a href="#" aria-label="Facebook"><SvgIcon icon={Icon::Facebook} size={20} /></a>
                        <a href="#" aria-label="Instagram"><SvgIcon icon={Icon::Instagram} size={20} /></a>
                    </div>
                </div>
                <div class="footer-copy">{ copyright_line(year) }</div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn copyright_names_the_company_and_year() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 Straight Edge Construction. All rights reserved."
        );
    }
}
