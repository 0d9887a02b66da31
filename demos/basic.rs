/* demos/basic.rs */

use cookie::Cookie;
use samesite::config::{DEFAULT_CONFIG_FILE, Properties};
use samesite::{CachedResolver, CookieProcessor, Handlers, Installer, NodeRole};
use std::fs;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// 0. Prepare a startup configuration file in the working directory
	fs::write(
		DEFAULT_CONFIG_FILE,
		"cookies.SameSite=Lax\ncookies.example.com./.sid.SameSite=Strict\n",
	)?;
	println!("Created {}", DEFAULT_CONFIG_FILE);

	// 1. Default resolver built from the file
	let handlers = Arc::new(Handlers::new());
	handlers.set_cookie_handler(CachedResolver::from_working_dir().await);

	// 2. Processor shared by request handlers
	let processor = CookieProcessor::new(Arc::clone(&handlers));

	let session = Cookie::build(("sid", "abc123"))
		.domain("example.com")
		.path("/")
		.http_only(true)
		.build();
	let preference = Cookie::build(("theme", "dark")).domain("example.com").path("/").build();
	let explicit = Cookie::build(("csrf", "xyz"))
		.path("/")
		.same_site(cookie::SameSite::Strict)
		.build();

	for cookie in [&session, &preference, &explicit] {
		println!("Set-Cookie: {}", processor.generate_header(cookie));
	}

	// 3. Application handlers replace the default when enabled
	let app_config: Properties = [
		("cookies.SameSite.install.application.handler", "true"),
		("cookies.SameSite", "None"),
	]
	.into_iter()
	.collect();
	let outcome = Installer::new().install(&handlers, NodeRole::Primary, app_config);
	println!("Installer: {:?}", outcome);
	println!("Set-Cookie: {}", processor.generate_header(&preference));

	// Cleanup
	fs::remove_file(DEFAULT_CONFIG_FILE)?;
	println!("Done.");
	Ok(())
}
