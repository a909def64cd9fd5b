use std::io::Error;

use super::data_types::SearchQuery;

#[derive(Debug, Clone)]
pub struct CmdArgs {
    pub config: Option<String>,
    pub feed: String,
    pub from: String,
    pub to: String,
    pub keywords: String,
    pub threshold: i64,
}

impl CmdArgs {
    pub fn parse(args: Vec<String>) -> Result<Self, Error> {
        let mut config: Option<String> = None;
        let mut feed = String::new();
        let mut from = String::new();
        let mut to = String::new();
        let mut keywords = String::new();
        let mut threshold: i64 = 0;
        {
            let mut ap = argparse::ArgumentParser::new();
            ap.set_description("Buzzfeed feed search CLI");
            ap.refer(&mut config).add_option(
                &["-c", "--config"],
                argparse::StoreOption,
                "Config file path",
            );
            ap.refer(&mut feed)
                .add_argument("feed", argparse::Store, "Feed page to search")
                .required();
            ap.refer(&mut from)
                .add_option(
                    &["--from"],
                    argparse::Store,
                    "Start timestamp, YYYY-MM-DD HH:MM:SS",
                )
                .required();
            ap.refer(&mut to)
                .add_option(
                    &["--to"],
                    argparse::Store,
                    "End timestamp, YYYY-MM-DD HH:MM:SS",
                )
                .required();
            ap.refer(&mut keywords).add_option(
                &["-k", "--keywords"],
                argparse::Store,
                "Comma-separated keywords to look for in titles and descriptions",
            );
            ap.refer(&mut threshold).add_option(
                &["-t", "--threshold"],
                argparse::Store,
                "Minimum comment count to keep a buzz",
            );

            match ap.parse(args, &mut std::io::stdout(), &mut std::io::stderr()) {
                Ok(()) => {}
                Err(_) => {
                    return Err(Error::from(std::io::ErrorKind::InvalidInput));
                }
            }
        }

        Ok(CmdArgs {
            config,
            feed,
            from,
            to,
            keywords,
            threshold,
        })
    }

    /// Shared inputs for the combined search. Blank keyword entries are
    /// dropped, so no keywords means an empty keyword set.
    #[must_use]
    pub fn to_query(&self) -> SearchQuery {
        SearchQuery {
            feed: self.feed.clone(),
            start: self.from.clone(),
            end: self.to.clone(),
            keywords: self
                .keywords
                .split(',')
                .map(str::trim)
                .filter(|keyword| !keyword.is_empty())
                .map(ToString::to_string)
                .collect(),
            threshold: self.threshold,
        }
    }
}
