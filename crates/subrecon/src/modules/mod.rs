pub mod enumeration;

use self::enumeration::assetfinder::Assetfinder;
use self::enumeration::findomain::Findomain;
use self::enumeration::subfinder::Subfinder;
use self::enumeration::EnumerationModule;

pub trait Module {
    fn name(&self) -> String;
    fn description(&self) -> String;
}

pub fn enumeration_modules() -> Vec<Box<dyn EnumerationModule>> {
    vec![
        Box::new(Subfinder::new()),
        Box::new(Findomain::new()),
        Box::new(Assetfinder::new()),
    ]
}
