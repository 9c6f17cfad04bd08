//! Input documents shared by the integration tests.

// ============================================================================
// yEd desktop
// ============================================================================

/// Two nodes, one control action and one feedback.
pub const SIMPLE_GRAPHML: &str = r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns" xmlns:y="http://www.yworks.com/xml/graphml" xmlns:yed="http://www.yworks.com/xml/yed/3">
  <key for="node" id="d6" yfiles.type="nodegraphics"/>
  <key for="edge" id="d10" yfiles.type="edgegraphics"/>
  <graph edgedefault="directed" id="G">
    <node id="n0">
      <data key="d6">
        <y:ShapeNode>
          <y:Geometry height="47.0" width="139.0" x="593.0" y="206.0"/>
          <y:Fill color="#FFCC00" transparent="false"/>
          <y:BorderStyle color="#000000" raised="false" type="line" width="1.0"/>
          <y:NodeLabel alignment="center" autoSizePolicy="content" visible="true">FlightCrew</y:NodeLabel>
          <y:Shape type="rectangle"/>
        </y:ShapeNode>
      </data>
    </node>
    <node id="n1">
      <data key="d6">
        <y:ShapeNode>
          <y:Geometry height="47.0" width="139.0" x="593.2" y="390.6"/>
          <y:Fill color="#FFCC00" transparent="false"/>
          <y:NodeLabel alignment="center" autoSizePolicy="content" visible="true">Flight</y:NodeLabel>
          <y:Shape type="rectangle"/>
        </y:ShapeNode>
      </data>
    </node>
    <edge id="e0" source="n0" target="n1">
      <data key="d10">
        <y:PolyLineEdge>
          <y:LineStyle color="#000000" type="line" width="1.0"/>
          <y:Arrows source="none" target="standard"/>
          <y:EdgeLabel alignment="center" distance="2.0">change altitude</y:EdgeLabel>
        </y:PolyLineEdge>
      </data>
    </edge>
    <edge id="e1" source="n1" target="n0">
      <data key="d10">
        <y:PolyLineEdge>
          <y:LineStyle color="#000000" type="dashed" width="1.0"/>
          <y:Arrows source="none" target="standard"/>
          <y:EdgeLabel alignment="center" distance="2.0">altitude</y:EdgeLabel>
        </y:PolyLineEdge>
      </data>
    </edge>
  </graph>
</graphml>
"##;

/// Multi-line labels, additional control information, an edge with an
/// unknown line style, an edge to a non-component node and an unlabeled edge.
pub const COMPOUND_GRAPHML: &str = r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns" xmlns:y="http://www.yworks.com/xml/graphml">
  <key for="node" id="d6" yfiles.type="nodegraphics"/>
  <key for="edge" id="d10" yfiles.type="edgegraphics"/>
  <graph edgedefault="directed" id="G">
    <node id="n0">
      <data key="d6"><y:ShapeNode>
        <y:Geometry height="47.0" width="139.0" x="593.0" y="206.0"/>
        <y:NodeLabel>FlightCrew</y:NodeLabel>
        <y:Shape type="rectangle"/>
      </y:ShapeNode></data>
    </node>
    <node id="n1">
      <data key="d6"><y:ShapeNode>
        <y:Geometry height="47.0" width="139.0" x="593.0" y="391.0"/>
        <y:NodeLabel>Flight</y:NodeLabel>
        <y:Shape type="rectangle"/>
      </y:ShapeNode></data>
    </node>
    <node id="n2">
      <data key="d6"><y:ShapeNode>
        <y:Geometry height="40.0" width="60.0" x="300.0" y="206.0"/>
        <y:NodeLabel>ANS</y:NodeLabel>
        <y:Shape type="rectangle"/>
      </y:ShapeNode></data>
    </node>
    <node id="n3">
      <data key="d6"><y:ShapeNode>
        <y:Geometry height="30.0" width="30.0" x="0.0" y="0.0"/>
        <y:NodeLabel>Weather</y:NodeLabel>
        <y:Shape type="ellipse"/>
      </y:ShapeNode></data>
    </node>
    <edge id="e0" source="n0" target="n1">
      <data key="d10"><y:PolyLineEdge>
        <y:LineStyle color="#000000" type="line" width="1.0"/>
        <y:EdgeLabel>change altitude
accelerate
decelerate</y:EdgeLabel>
      </y:PolyLineEdge></data>
    </edge>
    <edge id="e1" source="n1" target="n0">
      <data key="d10"><y:PolyLineEdge>
        <y:LineStyle color="#000000" type="dashed" width="1.0"/>
        <y:EdgeLabel>altitude
airspeed</y:EdgeLabel>
      </y:PolyLineEdge></data>
    </edge>
    <edge id="e2" source="n2" target="n0">
      <data key="d10"><y:PolyLineEdge>
        <y:LineStyle color="#000000" type="dotted" width="1.0"/>
        <y:EdgeLabel>weather and traffic info</y:EdgeLabel>
      </y:PolyLineEdge></data>
    </edge>
    <edge id="e3" source="n0" target="n1">
      <data key="d10"><y:PolyLineEdge>
        <y:LineStyle color="#000000" type="dashed_dotted" width="1.0"/>
        <y:EdgeLabel>unclassified</y:EdgeLabel>
      </y:PolyLineEdge></data>
    </edge>
    <edge id="e4" source="n3" target="n2">
      <data key="d10"><y:PolyLineEdge>
        <y:LineStyle color="#000000" type="line" width="1.0"/>
        <y:EdgeLabel>forecast</y:EdgeLabel>
      </y:PolyLineEdge></data>
    </edge>
    <edge id="e5" source="n2" target="n1">
      <data key="d10"><y:PolyLineEdge>
        <y:LineStyle color="#000000" type="line" width="1.0"/>
      </y:PolyLineEdge></data>
    </edge>
  </graph>
</graphml>
"##;

/// A group node containing three components, next to a top-level one.
pub const DESKTOP_SUBGRAPHS_GRAPHML: &str = r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns" xmlns:y="http://www.yworks.com/xml/graphml">
  <key for="node" id="d6" yfiles.type="nodegraphics"/>
  <key for="edge" id="d10" yfiles.type="edgegraphics"/>
  <graph edgedefault="directed" id="G">
    <node id="n0" yfiles.foldertype="group">
      <data key="d6">
        <y:ProxyAutoBoundsNode>
          <y:Realizers active="0">
            <y:GroupNode>
              <y:Geometry height="300.0" width="500.0" x="100.0" y="100.0"/>
              <y:NodeLabel modelName="internal" modelPosition="t">Drone</y:NodeLabel>
              <y:Shape type="roundrectangle"/>
            </y:GroupNode>
            <y:GroupNode>
              <y:Geometry height="50.0" width="80.0" x="100.0" y="100.0"/>
              <y:NodeLabel modelName="internal" modelPosition="t">Drone (folded)</y:NodeLabel>
              <y:Shape type="roundrectangle"/>
            </y:GroupNode>
          </y:Realizers>
        </y:ProxyAutoBoundsNode>
      </data>
      <graph edgedefault="directed" id="n0:">
        <node id="n0::n0">
          <data key="d6"><y:ShapeNode>
            <y:Geometry height="60.0" width="180.0" x="120.0" y="140.0"/>
            <y:NodeLabel>Flight Control &amp; Monitoring System</y:NodeLabel>
            <y:Shape type="rectangle"/>
          </y:ShapeNode></data>
        </node>
        <node id="n0::n1">
          <data key="d6"><y:ShapeNode>
            <y:Geometry height="40.0" width="100.0" x="120.0" y="300.0"/>
            <y:NodeLabel>Payload</y:NodeLabel>
            <y:Shape type="rectangle"/>
          </y:ShapeNode></data>
        </node>
        <node id="n0::n2">
          <data key="d6"><y:ShapeNode>
            <y:Geometry height="40.0" width="140.0" x="300.0" y="300.0"/>
            <y:NodeLabel>Propulsion
System</y:NodeLabel>
            <y:Shape type="rectangle"/>
          </y:ShapeNode></data>
        </node>
      </graph>
    </node>
    <node id="n1">
      <data key="d6"><y:ShapeNode>
        <y:Geometry height="40.0" width="120.0" x="700.0" y="140.0"/>
        <y:NodeLabel>Remote Control</y:NodeLabel>
        <y:Shape type="rectangle"/>
      </y:ShapeNode></data>
    </node>
    <edge id="n0::e0" source="n0::n0" target="n0::n1">
      <data key="d10"><y:PolyLineEdge>
        <y:LineStyle type="line"/>
        <y:EdgeLabel>Take videos, pictures</y:EdgeLabel>
      </y:PolyLineEdge></data>
    </edge>
    <edge id="n0::e1" source="n0::n0" target="n0::n2">
      <data key="d10"><y:PolyLineEdge>
        <y:LineStyle type="line"/>
        <y:EdgeLabel>Power up/down</y:EdgeLabel>
      </y:PolyLineEdge></data>
    </edge>
    <edge id="e0" source="n1" target="n0::n0">
      <data key="d10"><y:PolyLineEdge>
        <y:LineStyle type="line"/>
        <y:EdgeLabel>Flying Commands (Position, speed, orientation)</y:EdgeLabel>
      </y:PolyLineEdge></data>
    </edge>
  </graph>
</graphml>
"##;

/// Two connected components and one without any edge.
pub const UNCONNECTED_GRAPHML: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns" xmlns:y="http://www.yworks.com/xml/graphml">
  <graph edgedefault="directed" id="G">
    <node id="n0"><data key="d6"><y:ShapeNode>
      <y:NodeLabel>Controller</y:NodeLabel><y:Shape type="rectangle"/>
    </y:ShapeNode></data></node>
    <node id="n1"><data key="d6"><y:ShapeNode>
      <y:NodeLabel>Actuator</y:NodeLabel><y:Shape type="rectangle"/>
    </y:ShapeNode></data></node>
    <node id="n2"><data key="d6"><y:ShapeNode>
      <y:Geometry height="abc" width="10.0" x="0.0" y="0.0"/>
      <y:NodeLabel>Lonely component</y:NodeLabel><y:Shape type="rectangle"/>
    </y:ShapeNode></data></node>
    <node id="n3"><data key="d6"><y:ShapeNode>
      <y:NodeLabel>   </y:NodeLabel><y:Shape type="rectangle"/>
    </y:ShapeNode></data></node>
    <edge id="e0" source="n0" target="n1"><data key="d10"><y:PolyLineEdge>
      <y:LineStyle type="line"/><y:EdgeLabel>actuate</y:EdgeLabel>
    </y:PolyLineEdge></data></edge>
    <edge id="e1" source="n1" target="n0"><data key="d10"><y:PolyLineEdge>
      <y:LineStyle type="dashed"/><y:EdgeLabel>position</y:EdgeLabel>
    </y:PolyLineEdge></data></edge>
  </graph>
</graphml>
"##;

// ============================================================================
// yEd Live
// ============================================================================

/// yEd Live diagram with nested groups, ports and multi-label edges.
pub const ONLINE_SUBGRAPHS_GRAPHML: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns" xmlns:y="http://www.yworks.com/xml/yfiles-common/3.0" xmlns:x="http://www.yworks.com/xml/yfiles-common/markup/3.0" xmlns:yjs="http://www.yworks.com/xml/yfiles-for-html/2.0/xaml">
  <key id="d0" for="graph" attr.type="string" attr.name="json"/>
  <data key="d0"><Json>{"version": "2.0", "theme": {"name": "light"}}</Json></data>
  <graph id="G" edgedefault="directed">
    <node id="n0">
      <data key="d3"><x:List><y:Label Text="AIDA System"/></x:List></data>
      <data key="d4"><yjs:GroupNodeStyle tabFill="#FF111D4A"/></data>
      <data key="d5"><y:RectD X="0" Y="0" Width="900" Height="600"/></data>
      <graph id="n0:" edgedefault="directed">
        <node id="n0::n0">
          <data key="d3"><x:List><y:Label Text="Drone"/></x:List></data>
          <data key="d4"><yjs:GroupNodeStyle tabFill="#FF242265"/></data>
          <data key="d5"><y:RectD X="20" Y="40" Width="500" Height="500"/></data>
          <graph id="n0::n0:" edgedefault="directed">
            <node id="n0::n0::n0">
              <data key="d3"><x:List><y:Label Text="Flight Control &amp; Monitoring System"/></x:List></data>
              <data key="d4"><yjs:ShapeNodeStyle fill="#FFFFCC00" stroke="#FF000000"/></data>
              <data key="d5"><y:RectD X="40.4" Y="80.5" Width="200" Height="60"/></data>
              <port name="p0"/>
            </node>
            <node id="n0::n0::n1">
              <data key="d3"><x:List><y:Label Text="Payload"/></x:List></data>
              <data key="d4"><yjs:ShapeNodeStyle fill="#FFFFCC00"/></data>
              <data key="d5"><y:RectD X="40" Y="300" Width="120" Height="40"/></data>
            </node>
            <node id="n0::n0::n2">
              <data key="d3"><x:List><y:Label Text="Propulsion System"/></x:List></data>
              <data key="d4"><yjs:ShapeNodeStyle fill="#FFFFCC00"/></data>
              <data key="d5"><y:RectD X="300" Y="300" Width="160" Height="40"/></data>
            </node>
          </graph>
        </node>
        <node id="n0::n1">
          <data key="d3"><x:List><y:Label Text="Remote Control"/></x:List></data>
          <data key="d4"><yjs:ShapeNodeStyle fill="#FFFFCC00"/></data>
          <data key="d5"><y:RectD X="600" Y="80" Width="150" Height="60"/></data>
        </node>
        <node id="n0::n2">
          <data key="d3"><x:List><y:Label Text="Operator"/></x:List></data>
          <data key="d4"><yjs:ShapeNodeStyle shape="ELLIPSE" fill="#FFFFCC00"/></data>
          <data key="d5"><y:RectD X="600" Y="300" Width="60" Height="60"/></data>
        </node>
        <node id="n0::n3">
          <data key="d4"><yjs:ShapeNodeStyle fill="#FFFFCC00"/></data>
        </node>
      </graph>
    </node>
    <edge id="e0" source="n0::n0::n0" target="n0::n0::n1" sourceport="p0">
      <data key="d7"><x:List><y:Label Text="Take videos, pictures"/></x:List></data>
    </edge>
    <edge id="e1" source="n0::n0::n0" target="n0::n0::n2">
      <data key="d7"><x:List><y:Label Text="Power up/down"/></x:List></data>
      <data key="d8"><yjs:PolylineEdgeStyle><yjs:PolylineEdgeStyle.stroke><yjs:Stroke fill="#FF000000" dashStyle="Solid"/></yjs:PolylineEdgeStyle.stroke></yjs:PolylineEdgeStyle></data>
    </edge>
    <edge id="e2" source="n0::n1" target="n0::n0::n0">
      <data key="d7"><x:List>
        <y:Label Text="Flying Commands (Position, speed, orientation)"/>
        <y:Label Text="Mission Commands (Videos, pictures); Manual drone commands override"/>
      </x:List></data>
    </edge>
    <edge id="e3" source="n0::n0::n0" target="n0::n1">
      <data key="d7"><x:List><y:Label Text="Telemetry"/></x:List></data>
      <data key="d8"><yjs:PolylineEdgeStyle><yjs:PolylineEdgeStyle.stroke><yjs:Stroke dashStyle="Dash"/></yjs:PolylineEdgeStyle.stroke></yjs:PolylineEdgeStyle></data>
    </edge>
    <edge id="e4" source="n0::n0::n1" target="n0::n1">
      <data key="d7"><x:List><y:Label Text="Video stream"/></x:List></data>
      <data key="d8"><yjs:PolylineEdgeStyle><yjs:PolylineEdgeStyle.stroke><yjs:Stroke dashStyle="DashDot"/></yjs:PolylineEdgeStyle.stroke></yjs:PolylineEdgeStyle></data>
    </edge>
    <edge id="e5" source="n0::n2" target="n0::n1">
      <data key="d7"><x:List><y:Label Text="Commands"/></x:List></data>
    </edge>
  </graph>
</graphml>
"##;

// ============================================================================
// XMI
// ============================================================================

/// Papyrus-style model: two parts of a system joined by a control action and
/// a feedback connector.
pub const SIMPLE_XMI: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xmi:XMI xmi:version="20131001" xmlns:xmi="http://www.omg.org/spec/XMI/20131001" xmlns:uml="http://www.eclipse.org/uml2/5.0.0/UML" xmlns:STPA="http:///schemas/STPA/1">
  <uml:Model xmi:id="model" name="SimpleModel">
    <packagedElement xmi:type="uml:Class" xmi:id="controller" name="Controller"/>
    <packagedElement xmi:type="uml:Class" xmi:id="process" name="Controlled Process"/>
    <packagedElement xmi:type="uml:Class" xmi:id="crewType" name="FlightCrew">
      <generalization xmi:type="uml:Generalization" xmi:id="gen1" general="controller"/>
    </packagedElement>
    <packagedElement xmi:type="uml:Class" xmi:id="flightType" name="Flight">
      <generalization xmi:type="uml:Generalization" xmi:id="gen2" general="process"/>
      <ownedAttribute xmi:id="altitude" name="altitude">
        <type xmi:type="uml:PrimitiveType" href="pathmap://UML_LIBRARIES/UMLPrimitiveTypes.library.uml#Real"/>
      </ownedAttribute>
    </packagedElement>
    <packagedElement xmi:type="uml:Class" xmi:id="system" name="System">
      <ownedAttribute xmi:id="crew" name="crew" type="crewType" aggregation="composite" association="a1"/>
      <ownedAttribute xmi:id="flight" name="flight" type="flightType" aggregation="composite" association="a2">
        <lowerValue xmi:type="uml:LiteralInteger" xmi:id="flight-lower" value="1"/>
        <upperValue xmi:type="uml:LiteralUnlimitedNatural" xmi:id="flight-upper" value="*"/>
      </ownedAttribute>
      <ownedConnector xmi:id="ca" name="change altitude">
        <end xmi:id="ca-src" role="crew"/>
        <end xmi:id="ca-tgt" role="flight"/>
      </ownedConnector>
      <ownedConnector xmi:id="fb" name="altitude">
        <end xmi:id="fb-src" role="flight"/>
        <end xmi:id="fb-tgt" role="crew"/>
      </ownedConnector>
    </packagedElement>
    <packagedElement xmi:type="uml:Association" xmi:id="a1" memberEnd="crew a1-system">
      <ownedEnd xmi:id="a1-system" type="system" association="a1"/>
    </packagedElement>
    <packagedElement xmi:type="uml:Association" xmi:id="a2" name="flights" memberEnd="flight a2-system">
      <ownedEnd xmi:id="a2-system" type="system" association="a2"/>
    </packagedElement>
  </uml:Model>
  <STPA:ControlAction xmi:id="s1" base_Connector="ca"/>
  <STPA:Feedback xmi:id="s2" base_Connector="fb"/>
  <STPA:Controller xmi:id="s3" base_Class="controller"/>
  <STPA:ControlledProcess xmi:id="s4" base_Class="process"/>
</xmi:XMI>
"#;

/// Profile definition shipped next to a model inside archives.
pub const PROFILE_XMI: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xmi:XMI xmi:version="20131001" xmlns:xmi="http://www.omg.org/spec/XMI/20131001" xmlns:uml="http://www.eclipse.org/uml2/5.0.0/UML">
  <uml:Profile xmi:id="stpa" name="STPA">
    <packagedElement xmi:type="uml:Stereotype" xmi:id="st-ca" name="ControlAction"/>
  </uml:Profile>
</xmi:XMI>
"#;

/// A model with a three-ended connector.
pub const TERNARY_CONNECTOR_XMI: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<uml:Model xmi:version="20131001" xmlns:xmi="http://www.omg.org/spec/XMI/20131001" xmlns:uml="http://www.eclipse.org/uml2/5.0.0/UML" xmi:id="model" name="Broken">
  <packagedElement xmi:type="uml:Class" xmi:id="part" name="Part"/>
  <packagedElement xmi:type="uml:Class" xmi:id="system" name="System">
    <ownedAttribute xmi:id="a" name="a" type="part"/>
    <ownedAttribute xmi:id="b" name="b" type="part"/>
    <ownedAttribute xmi:id="c" name="c" type="part"/>
    <ownedConnector xmi:id="bus" name="bus">
      <end xmi:id="bus-a" role="a"/>
      <end xmi:id="bus-b" role="b"/>
      <end xmi:id="bus-c" role="c"/>
    </ownedConnector>
  </packagedElement>
</uml:Model>
"#;

/// Two classes sharing a qualified name.
pub const DUPLICATE_CLASS_XMI: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<uml:Model xmlns:xmi="http://www.omg.org/spec/XMI/20131001" xmlns:uml="http://www.eclipse.org/uml2/5.0.0/UML" xmi:id="model" name="Revisions">
  <packagedElement xmi:type="uml:Class" xmi:id="v1" name="Sensor"/>
  <packagedElement xmi:type="uml:Class" xmi:id="v2" name="Sensor">
    <generalization xmi:id="g" general="unknown"/>
  </packagedElement>
</uml:Model>
"#;

/// The same association declared twice with its member ends swapped.
pub const MIRRORED_ASSOCIATION_XMI: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<uml:Model xmlns:xmi="http://www.omg.org/spec/XMI/20131001" xmlns:uml="http://www.eclipse.org/uml2/5.0.0/UML" xmi:id="model" name="Fleet">
  <packagedElement xmi:type="uml:Class" xmi:id="pilotType" name="Pilot"/>
  <packagedElement xmi:type="uml:Class" xmi:id="planeType" name="Plane"/>
  <packagedElement xmi:type="uml:Association" xmi:id="link1" name="operates" memberEnd="l1-pilot l1-plane">
    <ownedEnd xmi:id="l1-pilot" name="pilot" type="pilotType" association="link1"/>
    <ownedEnd xmi:id="l1-plane" name="plane" type="planeType" association="link1"/>
  </packagedElement>
  <packagedElement xmi:type="uml:Association" xmi:id="link2" name="operates" memberEnd="l2-plane l2-pilot">
    <ownedEnd xmi:id="l2-plane" name="plane" type="planeType" association="link2"/>
    <ownedEnd xmi:id="l2-pilot" name="pilot" type="pilotType" association="link2"/>
  </packagedElement>
</uml:Model>
"#;

/// Two revisions of one class; only the later one should survive.
pub const REVISED_CLASS_XMI: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<uml:Model xmlns:xmi="http://www.omg.org/spec/XMI/20131001" xmlns:uml="http://www.eclipse.org/uml2/5.0.0/UML" xmi:id="model" name="Revisions">
  <packagedElement xmi:type="uml:Package" xmi:id="pkg" name="Sensors">
    <packagedElement xmi:type="uml:Class" xmi:id="reading" name="Reading"/>
    <packagedElement xmi:type="uml:Class" xmi:id="device" name="Device"/>
    <packagedElement xmi:type="uml:Class" xmi:id="sensor-v1" name="Sensor">
      <generalization xmi:id="g1" general="device"/>
      <ownedAttribute xmi:id="oldPart" name="oldPart" type="reading" aggregation="composite"/>
    </packagedElement>
    <packagedElement xmi:type="uml:Class" xmi:id="sensor-v2" name="Sensor">
      <ownedAttribute xmi:id="newPart" name="newPart" type="reading" aggregation="composite"/>
    </packagedElement>
  </packagedElement>
</uml:Model>
"#;

/// A stereotype record whose tag value happens to spell element ids.
pub const TAG_VALUE_XMI: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xmi:XMI xmi:version="20131001" xmlns:xmi="http://www.omg.org/spec/XMI/20131001" xmlns:uml="http://www.eclipse.org/uml2/5.0.0/UML" xmlns:STPA="http:///schemas/STPA/1">
  <uml:Model xmi:id="model" name="Tagged">
    <packagedElement xmi:type="uml:Class" xmi:id="crew" name="Crew"/>
    <packagedElement xmi:type="uml:Class" xmi:id="flight" name="Flight"/>
    <packagedElement xmi:type="uml:Class" xmi:id="reports" name="Reports"/>
  </uml:Model>
  <STPA:Controller xmi:id="s1" base_Class="flight" rationale="crew reports"/>
</xmi:XMI>
"#;

// ============================================================================
// Enterprise Architect
// ============================================================================

/// Enterprise Architect export of the simple model.
pub const VENDOR_XMI: &str = r#"<?xml version="1.0" encoding="windows-1252"?>
<xmi:XMI xmi:version="2.1" xmlns:uml="http://schema.omg.org/spec/UML/2.1" xmlns:xmi="http://schema.omg.org/spec/XMI/2.1" xmlns:STPA="http://www.sparxsystems.com/profiles/STPA/1.0">
  <xmi:Documentation exporter="Enterprise Architect" exporterVersion="6.5" exporterID="1628"/>
  <uml:Model xmi:type="uml:Model" name="EA_Model" visibility="public">
    <packagedElement xmi:type="uml:Package" xmi:id="EAPK_1" name="Control Structure" visibility="public">
      <packagedElement xmi:type="uml:Class" xmi:id="EAID_CREW" name="FlightCrew" visibility="public"/>
      <packagedElement xmi:type="uml:Class" xmi:id="EAID_FLIGHT" name="Flight" visibility="public"/>
      <packagedElement xmi:type="uml:Class" xmi:id="EAID_SYSTEM" name="System" visibility="public">
        <ownedAttribute xmi:type="uml:Property" xmi:id="EAID_P_CREW" name="crew" visibility="private" aggregation="composite">
          <type xmi:idref="EAID_CREW"/>
        </ownedAttribute>
        <ownedAttribute xmi:type="uml:Property" xmi:id="EAID_P_FLIGHT" name="flight" visibility="private" aggregation="composite">
          <type xmi:idref="EAID_FLIGHT"/>
        </ownedAttribute>
        <ownedConnector xmi:type="uml:Connector" xmi:id="EAID_CA" name="change altitude" visibility="public">
          <end xmi:type="uml:ConnectorEnd" xmi:id="EAID_CA_SRC" role="EAID_P_CREW"/>
          <end xmi:type="uml:ConnectorEnd" xmi:id="EAID_CA_TGT" role="EAID_P_FLIGHT"/>
        </ownedConnector>
        <ownedConnector xmi:type="uml:Connector" xmi:id="EAID_FB" name="altitude" visibility="public">
          <end xmi:type="uml:ConnectorEnd" xmi:id="EAID_FB_SRC" role="EAID_P_FLIGHT"/>
          <end xmi:type="uml:ConnectorEnd" xmi:id="EAID_FB_TGT" role="EAID_P_CREW"/>
        </ownedConnector>
      </packagedElement>
    </packagedElement>
  </uml:Model>
  <STPA:ControlAction base_Connector="EAID_CA"/>
  <STPA:Feedback base_Connector="EAID_FB"/>
  <xmi:Extension extender="Enterprise Architect" extenderID="6.5">
    <elements>
      <element xmi:idref="EAID_CREW" xmi:type="uml:Class" name="FlightCrew" scope="public"/>
    </elements>
    <connectors>
      <connector xmi:idref="EAID_CA"><source xmi:idref="EAID_P_CREW"/></connector>
    </connectors>
  </xmi:Extension>
</xmi:XMI>
"#;
