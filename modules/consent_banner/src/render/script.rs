//! Browser consent client
//!
//! Emitted inline after the banner markup. On accept/decline it writes
//! the consent cookie, plays the exit animation and removes the banner
//! from layout after the configured delay. A timed verification only
//! logs a failed cookie write (blocked storage, private mode); the
//! banner hides regardless, so the visitor may see it again next visit.

const TEMPLATE: &str = r#"(function () {
  var banner = document.getElementById('cb-banner');
  var acceptBtn = document.getElementById('cb-accept');
  var declineBtn = document.getElementById('cb-decline');

  function setConsentCookie(value, days) {
    var cookie = '__COOKIE_NAME__=' + value +
      '; max-age=' + (days * 86400) +
      '; path=/; SameSite=Lax';
    if (window.location.protocol === 'https:') {
      cookie += '; Secure';
    }
    document.cookie = cookie;
    setTimeout(function () {
      if (document.cookie.indexOf('__COOKIE_NAME__=') === -1) {
        console.error('Consent cookie was not persisted; browser storage may be blocked.');
      }
    }, 100);
  }

  function dismiss() {
    if (!banner) {
      return;
    }
    banner.classList.add('cb-hide');
    setTimeout(function () {
      banner.style.display = 'none';
    }, __HIDE_DELAY__);
  }

  function choose(value) {
    return function () {
      var days = parseInt(this.getAttribute('data-duration'), 10) || 365;
      setConsentCookie(value, days);
      dismiss();
    };
  }

  if (acceptBtn) {
    acceptBtn.addEventListener('click', choose('accepted'));
  }
  if (declineBtn) {
    declineBtn.addEventListener('click', choose('declined'));
  }
})();
"#;

/// Render the consent client for a cookie name and dismiss delay.
pub fn consent_script(cookie_name: &str, hide_delay_ms: u64) -> String {
    TEMPLATE
        .replace("__COOKIE_NAME__", &safe_cookie_name(cookie_name))
        .replace("__HIDE_DELAY__", &hide_delay_ms.to_string())
}

/// Restrict the configured cookie name to token characters so it cannot
/// break out of the script or the Set-Cookie grammar.
fn safe_cookie_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
        .collect();
    if cleaned.is_empty() {
        "consent_banner_choice".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_embeds_cookie_name_and_delay() {
        let js = consent_script("consent_banner_choice", 500);
        assert!(js.contains("consent_banner_choice="));
        assert!(js.contains("}, 500);"));
        assert!(js.contains("days * 86400"));
    }

    #[test]
    fn hostile_cookie_name_is_stripped() {
        let js = consent_script("evil';alert(1);//", 500);
        assert!(!js.contains("evil'"));
        assert!(js.contains("evilalert1="));
    }

    #[test]
    fn empty_cookie_name_falls_back() {
        let js = consent_script(";;;", 500);
        assert!(js.contains("consent_banner_choice="));
    }
}
